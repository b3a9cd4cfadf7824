//! Plain-text rendering for the four views: task list, task detail,
//! calendar, and the static settings/profile pages.

use crate::models::{Priority, Profile, Settings, SubTask, Task};
use crate::view::{DayFlag, MonthGrid};

const DONE: char = '●';
const OPEN: char = '○';

/// Get the completion symbol for a task or subtask.
fn status_symbol(completed: bool) -> char {
    if completed {
        DONE
    } else {
        OPEN
    }
}

/// One-character urgency marker, also used for calendar day flags.
fn priority_mark(priority: Priority) -> char {
    match priority {
        Priority::High => '!',
        Priority::Medium => '*',
        Priority::Low => '-',
    }
}

fn flag_mark(flag: DayFlag) -> char {
    match flag {
        DayFlag::High => '!',
        DayFlag::Medium => '*',
        DayFlag::None => ' ',
    }
}

/// Render the filtered task list with its count header.
///
/// Example output:
/// ```text
/// TASKS (2)
///
/// ○ ! 2023-12-31  Reactor inspection [Work] (120 min)
///     ├── ○ Check water filter
///     └── ● Read gauges
/// ● * 2023-11-30  Inventory count [Personal] (60 min)
/// ```
pub fn render_task_list(tasks: &[Task]) -> String {
    let mut output = format!("TASKS ({})\n\n", tasks.len());

    if tasks.is_empty() {
        output.push_str("No tasks found matching your filters.\n");
        return output;
    }

    for task in tasks {
        output.push_str(&task_line(task));
        output.push('\n');
        render_subtask_branches(&mut output, &task.subtasks);
    }

    output
}

fn task_line(task: &Task) -> String {
    let mut line = format!(
        "{} {} {}  {}",
        status_symbol(task.completed),
        priority_mark(task.priority),
        task.due_date,
        task.title
    );
    if !task.category.is_empty() {
        line.push_str(&format!(" [{}]", task.category));
    }
    if let Some(minutes) = task.estimated_time {
        line.push_str(&format!(" ({} min)", minutes));
    }
    line
}

/// Subtasks render as tree branches under their parent task.
fn render_subtask_branches(output: &mut String, subtasks: &[SubTask]) {
    for (i, subtask) in subtasks.iter().enumerate() {
        let is_last = i == subtasks.len() - 1;
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str("    ");
        output.push_str(branch);
        output.push(status_symbol(subtask.completed));
        output.push(' ');
        output.push_str(&subtask.title);
        output.push('\n');
    }
}

/// Render the detail view opened from the calendar or `show`.
pub fn render_task_detail(task: &Task) -> String {
    let mut output = String::from("TASK DETAILS\n\n");

    output.push_str(&format!(
        "{} {}\n",
        status_symbol(task.completed),
        task.title
    ));
    if !task.description.is_empty() {
        output.push_str(&task.description);
        output.push('\n');
    }
    output.push('\n');

    let due = match task.due() {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => task.due_date.clone(),
    };
    output.push_str(&format!("Due Date: {}\n", due));
    output.push_str(&format!(
        "Priority: {}\n",
        task.priority.as_str().to_uppercase()
    ));
    if !task.category.is_empty() {
        output.push_str(&format!("Category: {}\n", task.category));
    }
    if let Some(minutes) = task.estimated_time {
        output.push_str(&format!("Est. Time: {} minutes\n", minutes));
    }

    if !task.subtasks.is_empty() {
        output.push_str("\nSubtasks:\n");
        for subtask in &task.subtasks {
            output.push_str(&format!(
                "  {} {}  ({})\n",
                status_symbol(subtask.completed),
                subtask.title,
                subtask.id
            ));
        }
    }

    output
}

/// Render the month grid plus a listing of the days that have tasks.
///
/// Flagged days carry their urgency marker next to the day number:
/// ```text
/// SCHEDULE: December 2023
///
///  Su  Mo  Tu  We  Th  Fr  Sa
///                       1   2
///   3   4   5   6   7   8   9
///  10  11  12  13  14  15  16
///  17  18  19  20  21  22  23
///  24  25  26  27  28  29  30
///  31!
///
///  31  ○ ! Reactor inspection
/// ```
pub fn render_calendar(grid: &MonthGrid) -> String {
    let mut output = format!(
        "SCHEDULE: {} {}\n\n",
        crate::view::month_name(grid.month),
        grid.year
    );

    for name in ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"] {
        output.push_str(&format!("{:>3} ", name));
    }
    trim_row_end(&mut output);
    output.push('\n');

    let mut column = 0;
    for _ in 0..grid.leading_blanks {
        output.push_str("    ");
        column += 1;
    }
    for cell in &grid.days {
        output.push_str(&format!("{:>3}{}", cell.day, flag_mark(cell.flag)));
        column += 1;
        if column == 7 {
            trim_row_end(&mut output);
            output.push('\n');
            column = 0;
        }
    }
    if column != 0 {
        trim_row_end(&mut output);
        output.push('\n');
    }

    let mut listing = String::new();
    for cell in grid.busy_days() {
        for task in &cell.tasks {
            listing.push_str(&format!(
                "{:>3}  {} {} {}\n",
                cell.day,
                status_symbol(task.completed),
                priority_mark(task.priority),
                task.title
            ));
        }
    }
    if !listing.is_empty() {
        output.push('\n');
        output.push_str(&listing);
    }

    output
}

fn trim_row_end(output: &mut String) {
    while output.ends_with(' ') {
        output.pop();
    }
}

/// Render the static settings form.
pub fn render_settings(settings: &Settings) -> String {
    let switch = |on: bool| if on { "[x]" } else { "[ ]" };

    format!(
        "SYSTEM SETTINGS\n\n\
         Username:         {}\n\
         Email:            {}\n\
         Default View:     {}\n\
         Default Priority: {}\n\n\
         NOTIFICATIONS\n\
         {} Task Reminders   Receive notifications for upcoming tasks\n\
         {} Weekly Summary   Get a weekly summary of your tasks\n\
         {} System Updates   Be notified about system maintenance and updates\n",
        settings.username,
        settings.email,
        settings.default_view.as_str(),
        settings.default_priority.as_str(),
        switch(settings.task_reminders),
        switch(settings.weekly_summary),
        switch(settings.system_updates),
    )
}

/// Render the static profile page.
pub fn render_profile(profile: &Profile) -> String {
    format!(
        "OPERATOR PROFILE\n\n\
         {}\n\
         {}\n\n\
         User ID:      {}\n\
         Access Level: {}\n\
         Join Date:    {}\n\
         Department:   {}\n\
         Position:     {}\n\
         Email:        {}\n\n\
         PERFORMANCE STATS\n\
         Completion Rate: {}% ({} of {} tasks completed)\n\
         High Priority:   {} tasks\n",
        profile.name,
        profile.station,
        profile.user_id,
        profile.access_level,
        profile.join_date,
        profile.department,
        profile.position,
        profile.email,
        profile.stats.completion_rate,
        profile.stats.completed_tasks,
        profile.stats.total_tasks,
        profile.stats.high_priority_tasks,
    )
}
