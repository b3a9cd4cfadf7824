use anyhow::bail;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use vault_tasks::form::TaskForm;
use vault_tasks::models::{Priority, Profile, Settings};
use vault_tasks::render;
use vault_tasks::storage::SqliteStore;
use vault_tasks::store::TaskStore;
use vault_tasks::view::{MonthGrid, SortKey, StatusFilter, TaskQuery};

#[derive(Parser)]
#[command(name = "vault-tasks")]
#[command(about = "Retro terminal task manager with calendar scheduling")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tasks, filtered and sorted
    List {
        /// Status filter: all, active, completed
        #[arg(long, default_value = "all")]
        status: String,

        /// Only tasks in this category
        #[arg(long)]
        category: Option<String>,

        /// Only tasks with this priority: low, medium, high
        #[arg(long)]
        priority: Option<String>,

        /// Sort key: due-date, priority, title
        #[arg(long, default_value = "due-date")]
        sort: String,
    },
    /// Create a new task
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Due date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        due: Option<String>,

        /// low, medium or high (defaults to medium)
        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Estimated time in minutes
        #[arg(long)]
        estimate: Option<u32>,

        /// Subtask title (repeatable)
        #[arg(long = "subtask")]
        subtasks: Vec<String>,
    },
    /// Edit an existing task
    Edit {
        id: Uuid,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Due date as YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,

        /// low, medium or high
        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Estimated time in minutes
        #[arg(long)]
        estimate: Option<u32>,

        /// Add a subtask (repeatable)
        #[arg(long = "add-subtask")]
        add_subtasks: Vec<String>,

        /// Remove a subtask by id (repeatable)
        #[arg(long = "remove-subtask")]
        remove_subtasks: Vec<Uuid>,
    },
    /// Show the detail view for one task
    Show { id: Uuid },
    /// Delete a task
    Delete { id: Uuid },
    /// Toggle completion on a task
    Toggle { id: Uuid },
    /// Operate on subtasks of a task
    Subtask {
        #[command(subcommand)]
        command: SubtaskCommands,
    },
    /// View the monthly schedule
    Calendar {
        #[arg(long)]
        year: Option<i32>,

        /// 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
    },
    /// View system settings
    Settings {
        /// Apply the settings form
        #[arg(long)]
        save: bool,
    },
    /// View the operator profile
    Profile,
}

#[derive(Subcommand)]
enum SubtaskCommands {
    /// Toggle completion on a subtask
    Toggle { task_id: Uuid, subtask_id: Uuid },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "vault_tasks=warn".into()),
    );

    // Log to stderr so stdout stays clean for the rendered views
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let storage = SqliteStore::open_default()?;
    storage.migrate()?;
    let mut store = TaskStore::load(Box::new(storage))?;

    match cli.command {
        Some(Commands::List {
            status,
            category,
            priority,
            sort,
        }) => {
            let query = build_query(&status, category, priority.as_deref(), &sort)?;
            print!("{}", render::render_task_list(&query.apply(store.tasks())));
        }
        Some(Commands::Add {
            title,
            description,
            due,
            priority,
            category,
            estimate,
            subtasks,
        }) => {
            let mut form = TaskForm::create();
            form.set_field("title", &title);
            apply_fields(&mut form, description, due, priority, category, estimate)?;
            for subtask in subtasks {
                if !form.add_subtask(&subtask) {
                    println!("Ignoring empty subtask title");
                }
            }

            let task = form.submit();
            let id = task.id;
            store.add(task)?;
            println!("Task Created ({})", id);
            println!("Your new task has been added to the system.");
        }
        Some(Commands::Edit {
            id,
            title,
            description,
            due,
            priority,
            category,
            estimate,
            add_subtasks,
            remove_subtasks,
        }) => {
            let Some(task) = store.get(id) else {
                println!("No task found with id {}", id);
                return Ok(());
            };

            let mut form = TaskForm::edit(task);
            if let Some(title) = title {
                form.set_field("title", &title);
            }
            apply_fields(&mut form, description, due, priority, category, estimate)?;
            for subtask_id in remove_subtasks {
                if !form.remove_subtask(subtask_id) {
                    println!("No subtask found with id {}", subtask_id);
                }
            }
            for subtask in add_subtasks {
                if !form.add_subtask(&subtask) {
                    println!("Ignoring empty subtask title");
                }
            }

            store.update(form.submit())?;
            println!("Task Updated");
            println!("Your task has been successfully updated.");
        }
        Some(Commands::Show { id }) => match store.get(id) {
            Some(task) => print!("{}", render::render_task_detail(task)),
            None => println!("No task found with id {}", id),
        },
        Some(Commands::Delete { id }) => {
            if store.delete(id)? {
                println!("Task Deleted");
                println!("The task has been removed from your list.");
            } else {
                println!("No task found with id {}", id);
            }
        }
        Some(Commands::Toggle { id }) => match store.toggle_complete(id)? {
            Some(true) => {
                println!("Task Completed");
                println!("The task has been marked as completed.");
            }
            Some(false) => {
                println!("Task Reopened");
                println!("The task has been reopened.");
            }
            None => println!("No task found with id {}", id),
        },
        Some(Commands::Subtask {
            command: SubtaskCommands::Toggle {
                task_id,
                subtask_id,
            },
        }) => match store.toggle_subtask(task_id, subtask_id)? {
            Some(true) => println!("Subtask Completed"),
            Some(false) => println!("Subtask Reopened"),
            None => println!("No matching subtask found"),
        },
        Some(Commands::Calendar { year, month }) => {
            let today = Local::now().date_naive();
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            if !(1..=12).contains(&month) {
                bail!("Month must be between 1 and 12");
            }

            let grid = MonthGrid::project(store.tasks(), year, month);
            print!("{}", render::render_calendar(&grid));
        }
        Some(Commands::Settings { save }) => {
            print!("{}", render::render_settings(&Settings::default()));
            if save {
                println!();
                println!("Settings Saved");
                println!("Your preferences have been updated successfully.");
            }
        }
        Some(Commands::Profile) => {
            print!("{}", render::render_profile(&Profile::default()));
        }
        None => {
            // Default view: the task list
            print!(
                "{}",
                render::render_task_list(&TaskQuery::default().apply(store.tasks()))
            );
        }
    }

    Ok(())
}

fn build_query(
    status: &str,
    category: Option<String>,
    priority: Option<&str>,
    sort: &str,
) -> anyhow::Result<TaskQuery> {
    let Some(status) = StatusFilter::from_str(status) else {
        bail!("Unknown status filter: {}", status);
    };
    let Some(sort) = SortKey::from_str(sort) else {
        bail!("Unknown sort key: {}", sort);
    };
    let priority = match priority {
        Some(p) => match Priority::from_str(p) {
            Some(p) => Some(p),
            None => bail!("Unknown priority: {}", p),
        },
        None => None,
    };

    Ok(TaskQuery {
        status,
        category,
        priority,
        sort,
    })
}

fn apply_fields(
    form: &mut TaskForm,
    description: Option<String>,
    due: Option<String>,
    priority: Option<String>,
    category: Option<String>,
    estimate: Option<u32>,
) -> anyhow::Result<()> {
    if let Some(description) = description {
        form.set_field("description", &description);
    }
    if let Some(due) = due {
        form.set_field("dueDate", &due);
    }
    if let Some(priority) = priority {
        if Priority::from_str(&priority).is_none() {
            bail!("Unknown priority: {}", priority);
        }
        form.set_field("priority", &priority);
    }
    if let Some(category) = category {
        form.set_field("category", &category);
    }
    if let Some(estimate) = estimate {
        form.set_field("estimatedTime", &estimate.to_string());
    }
    Ok(())
}
