//! Logo resolution domain: brands, slugs, formats, candidates and the
//! lookup map, plus the pure policies and services that operate on them.
pub mod domain;
pub mod policies;
pub mod services;
