/// Structural-empty condition: removing or peeking at the top of an empty
/// stack. Queue-like removals return `None` instead of this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation on an empty collection")]
pub struct EmptyCollection;
