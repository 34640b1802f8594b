//! Glue shared by the solution binaries: input loading and log setup.

pub mod input;
pub mod logging;
