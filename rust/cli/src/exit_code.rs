//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, or a failed command.
pub const ERROR: i32 = 2;

/// Input closed in the middle of an interactive session.
pub const INTERRUPTED: i32 = 130;
