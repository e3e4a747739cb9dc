//! Shell command execution and host environment helpers.

pub mod command;
pub mod env;
pub mod lookup;
pub mod runlog;

pub use command::{execute, execute_check, CommandOptions, CommandResult};
pub use env::{is_ci, is_elevated};
pub use lookup::{executable_on_path, is_executable, resolve_executable, system_path};
pub use runlog::RunLog;
