use crate::error::ResourceError;
use std::time::Duration;

/// A blocking HTTP fetch with a bounded total duration.
///
/// Abstracted as a trait so tests can inject failures without a network.
pub trait RemoteFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ResourceError>;
}

/// `ureq`-backed fetcher. One attempt per call; non-success status codes and
/// timeouts both surface as [`ResourceError::FetchFailed`].
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl RemoteFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ResourceError> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ResourceError::FetchFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        response
            .body_mut()
            .read_to_vec()
            .map_err(|e| ResourceError::FetchFailed {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_host_is_a_fetch_failure() {
        let fetcher = HttpFetcher::new(Duration::from_millis(200));
        let result = fetcher.fetch("http://127.0.0.1:1/never.png");
        assert!(matches!(result, Err(ResourceError::FetchFailed { .. })));
    }
}
