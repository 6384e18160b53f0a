/// Error display strings.
pub mod error;

/// Register name lookup and indexing.
pub mod register;
