mod error;
mod locator;
mod rewriter;

pub use error::RewriteError;
pub use rewriter::Rewriter;

pub type Result<T> = std::result::Result<T, RewriteError>;
