pub mod stream;

pub use stream::{chat_loop, run_stdio};
