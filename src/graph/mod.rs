//! Display-graph model, construction, and rewrites

pub mod filter;
pub mod rewrite;
pub mod store;
pub mod types;

pub use filter::is_filtered;
pub use rewrite::{apply_label_overrides, propertize};
pub use store::DisplayGraph;
pub use types::{DisplayEdge, DisplayNode};
