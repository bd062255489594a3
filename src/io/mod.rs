pub mod library;
pub mod provider;
pub mod wikipedia;

pub use library::Library;
pub use provider::{DocumentProvider, FetchError};
pub use wikipedia::Wikipedia;
