//! External tool execution

pub mod subprocess;
