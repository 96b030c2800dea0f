//! The in-memory task model.
//!
//! A [`TaskTable`] maps unique, case-sensitive names to [`Task`] records. It
//! lives for as long as its owning interpreter and is never persisted.

mod table;
mod types;

pub use table::TaskTable;
pub use types::{Status, Task};
