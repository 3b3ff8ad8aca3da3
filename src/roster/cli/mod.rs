//! # CLI Layer
//!
//! One possible presentation layer for roster. This is the only place that
//! touches the terminal: it builds candidate fields from flags, asks for
//! delete confirmation, prints tables and messages, and maps rejections to a
//! non-zero exit.

pub mod logging;
pub mod print;
