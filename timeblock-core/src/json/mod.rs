//! Schedule file parsing and generation.
//!
//! This module handles reading and writing the JSON schedule format: a
//! top-level array of task objects with PascalCase keys.

mod generate;
mod parse;

pub use generate::generate_schedule;
pub use parse::{parse_schedule, parse_task};
