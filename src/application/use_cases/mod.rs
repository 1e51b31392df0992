/// Use cases module containing application business logic orchestration
mod acquire_logo;
mod analyze_logos;
mod generate_map;
mod resolve_domain;
mod resolve_logos;

pub use acquire_logo::AcquireLogoUseCase;
pub use analyze_logos::AnalyzeLogosUseCase;
pub use generate_map::GenerateMapUseCase;
pub use resolve_domain::ResolveDomainUseCase;
pub use resolve_logos::ResolveLogosUseCase;
