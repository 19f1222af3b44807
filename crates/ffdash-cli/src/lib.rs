//! Library components of the `ffdash` command-line tool.

pub mod alert;
pub mod logging;
pub mod render;
pub mod settings;
