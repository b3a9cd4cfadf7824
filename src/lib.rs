//! Core library for vault-tasks: task models, the write-through task
//! store, the filter/sort and calendar projections, the task form
//! controller, and plain-text renderers for every view. The `vlt` binary
//! is presentation glue over this crate.

pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod storage;
pub mod store;
pub mod view;
