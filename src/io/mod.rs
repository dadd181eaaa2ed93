//! File I/O for analyses and exports.

pub mod reader;

pub use reader::{read_file, read_json, write_file};
