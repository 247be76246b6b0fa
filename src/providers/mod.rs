pub mod deepseek;
pub mod traits;

pub use deepseek::DeepSeekProvider;
pub use traits::{CompletionError, CompletionProvider};
