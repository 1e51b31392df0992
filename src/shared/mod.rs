/// Shared kernel - error types, result alias and file security helpers
pub mod error;
pub mod security;

/// Crate-wide result type.
///
/// Pipeline stages return `anyhow::Error` so that context can be attached
/// at each boundary; typed failures live in [`error::LogoError`].
pub type Result<T> = std::result::Result<T, anyhow::Error>;
