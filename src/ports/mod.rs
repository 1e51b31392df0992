/// Ports module defining the interfaces of the hexagonal architecture
///
/// Only outbound (driven) ports exist: the CLI drives the use cases directly.
pub mod outbound;
