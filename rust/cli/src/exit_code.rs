//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, invalid configuration, unreadable input or a
/// failed write.
pub const ERROR: i32 = 2;
