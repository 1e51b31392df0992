use async_trait::async_trait;
use logo_resolver::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock DomainSearch answering from a fixed table and counting calls
#[derive(Default, Clone)]
pub struct MockDomainSearch {
    answers: HashMap<String, String>,
    call_count: Arc<AtomicUsize>,
}

impl MockDomainSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, brand_name: &str, domain: &str) -> Self {
        self.answers
            .insert(brand_name.to_string(), domain.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DomainSearch for MockDomainSearch {
    async fn search_domain(&self, brand_name: &str) -> Result<Option<String>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.answers.get(brand_name).cloned())
    }
}
