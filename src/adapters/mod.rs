/// Adapters layer - Concrete implementations of the ports
///
/// HTTP and web search, the logo cache directory, map and report
/// formatters, and terminal progress output.
pub mod outbound;
