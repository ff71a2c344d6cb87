//! CLI引数の解析

pub mod args;

pub use args::{parse_args, Config, ParseOutcome};
