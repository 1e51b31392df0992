use crate::logo_resolution::domain::Brand;

/// ResolveRequest - Request DTO for the acquisition pipeline
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub brands: Vec<Brand>,
    /// Perform every lookup but write nothing
    pub dry_run: bool,
}

impl ResolveRequest {
    pub fn new(brands: Vec<Brand>, dry_run: bool) -> Self {
        Self { brands, dry_run }
    }
}
