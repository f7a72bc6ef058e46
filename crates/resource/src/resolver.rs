use crate::error::ResourceError;
use crate::fetch::{HttpFetcher, RemoteFetcher};
use crate::source::ImageSource;
use std::time::Duration;

/// Resolves a room's image reference to raw image bytes.
///
/// Classification happens once via [`ImageSource::parse`]; inline bytes are
/// returned directly, remote references go through the configured fetcher.
pub struct ImageResolver {
    fetcher: Box<dyn RemoteFetcher>,
}

impl ImageResolver {
    pub fn new(timeout: Duration) -> Self {
        Self {
            fetcher: Box::new(HttpFetcher::new(timeout)),
        }
    }

    pub fn with_fetcher(fetcher: Box<dyn RemoteFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn resolve(&self, reference: &str) -> Result<Vec<u8>, ResourceError> {
        match ImageSource::parse(reference)? {
            ImageSource::Inline(bytes) => Ok(bytes),
            ImageSource::Remote(url) => {
                log::debug!("fetching room image from {}", url);
                self.fetcher.fetch(&url)
            }
        }
    }
}
