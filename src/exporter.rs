use hugo_render::{Clock, RenderError, RoomPdfRenderer, SystemClock};
use hugo_resource::{BrandAsset, ImageResolver, RemoteFetcher, load_brand_asset};
use hugo_types::RoomRecord;
use std::path::PathBuf;
use std::time::Duration;

/// Exporter tuning: how long a remote image fetch may take and where the
/// hotel brand image lives, if anywhere.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub fetch_timeout: Duration,
    pub brand_asset_path: Option<PathBuf>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(5),
            brand_asset_path: None,
        }
    }
}

/// Produces the room details PDF from a [`RoomRecord`].
///
/// The brand asset is loaded once at construction. Each export resolves the
/// record's image reference (inline or remote) at most once; resolution
/// failures are logged and the image region is skipped.
pub struct RoomExporter {
    resolver: ImageResolver,
    brand: BrandAsset,
    renderer: RoomPdfRenderer,
    clock: Box<dyn Clock>,
}

impl RoomExporter {
    pub fn new(config: ExporterConfig) -> Self {
        let brand = match &config.brand_asset_path {
            Some(path) => load_brand_asset(path),
            None => BrandAsset::Missing,
        };
        Self {
            resolver: ImageResolver::new(config.fetch_timeout),
            brand,
            renderer: RoomPdfRenderer::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the remote fetcher, for tests that must not touch the network.
    pub fn with_fetcher(mut self, fetcher: Box<dyn RemoteFetcher>) -> Self {
        self.resolver = ImageResolver::with_fetcher(fetcher);
        self
    }

    /// Pins the footer date to a fixed clock.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn export(&self, record: &RoomRecord) -> Result<Vec<u8>, RenderError> {
        let image = record.image.as_deref().and_then(|reference| {
            match self.resolver.resolve(reference) {
                Ok(bytes) => Some(bytes),
                Err(err) => {
                    log::warn!("room image unavailable, skipping: {err}");
                    None
                }
            }
        });
        self.renderer.render(
            record,
            image.as_deref(),
            self.brand.bytes(),
            self.clock.as_ref(),
        )
    }
}
