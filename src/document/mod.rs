pub mod chunker;
pub mod disambig;
pub mod segment;
pub mod style;
pub mod types;

pub use style::{Style, stylize};
pub use types::Document;
