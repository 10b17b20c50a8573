// In crates/commentary/src/lib.rs

use async_trait::async_trait;

pub mod error;
pub mod mock;
pub mod types;

// Re-export public types.
pub use error::{Error, Result};
pub use mock::MockAnalyst;
pub use types::{Commentary, CommentaryContext, Sentiment};

/// The universal interface for a commentary generator.
///
/// A provider turns a summarized signal context into advisory prose for
/// the dashboard's analysis panels. It is a swappable collaborator: the
/// mock renders a deterministic template, and a real LLM-backed provider
/// would implement the same trait.
#[async_trait]
pub trait CommentaryProvider: Send + Sync {
    /// The name of the provider (e.g., "MockAnalyst").
    fn name(&self) -> &'static str;

    /// Generates commentary for the given context.
    async fn generate_commentary(&self, context: &CommentaryContext) -> Result<Commentary>;
}
