/// Application layer - Use cases, DTOs and factories
///
/// Orchestrates the logo resolution pipeline: the use cases drive the
/// domain policies and services and reach the network, the cache and the
/// console only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
