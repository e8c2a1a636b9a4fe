//! Terminal reporting: summary table and Unicode plots.

mod plots;
mod terminal;

pub use plots::{density_plot, scatter_plot, trace_plot};
pub use terminal::format_summary;
