use async_trait::async_trait;
use logo_resolver::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock HttpFetcher serving canned bodies and recording every request
///
/// Unknown URLs answer 404. Clones share the request log, so a test can keep
/// one clone and hand the other to a use case.
#[derive(Default, Clone)]
pub struct MockHttpFetcher {
    responses: HashMap<String, (u16, Vec<u8>)>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockHttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `url` with 200 and `body`
    pub fn with_body(self, url: &str, body: Vec<u8>) -> Self {
        self.with_response(url, 200, body)
    }

    pub fn with_response(mut self, url: &str, status: u16, body: Vec<u8>) -> Self {
        self.responses.insert(url.to_string(), (status, body));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpFetcher for MockHttpFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(match self.responses.get(url) {
            Some((status, body)) => HttpResponse::new(*status, body.clone(), url),
            None => HttpResponse::new(404, b"Not Found".to_vec(), url),
        })
    }
}
