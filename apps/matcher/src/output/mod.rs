pub mod history;
pub mod report;

pub use history::append_history;
pub use report::{render_report, render_summary, save_report, ReportInput};
