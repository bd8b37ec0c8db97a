pub mod report;
pub mod tree;

pub use report::{print_report, to_json};
pub use tree::render_tree;
