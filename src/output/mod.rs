pub mod formatter;

pub use formatter::{format_breakdown, format_total, should_use_colors};
