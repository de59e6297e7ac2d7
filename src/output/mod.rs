pub mod formatter;

pub use formatter::{format_history, format_result, result_json, should_use_colors};
