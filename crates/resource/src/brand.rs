use std::path::Path;

/// Outcome of loading the hotel brand image from disk.
///
/// A missing asset is an expected configuration, not an error: the renderer
/// falls back to a text brand mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandAsset {
    Found(Vec<u8>),
    Missing,
}

impl BrandAsset {
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            BrandAsset::Found(bytes) => Some(bytes),
            BrandAsset::Missing => None,
        }
    }
}

/// Reads the brand image at `path`, degrading to [`BrandAsset::Missing`] on
/// any failure.
pub fn load_brand_asset(path: &Path) -> BrandAsset {
    match std::fs::read(path) {
        Ok(bytes) => BrandAsset::Found(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!(
                "brand asset {} not found, using text brand mark",
                path.display()
            );
            BrandAsset::Missing
        }
        Err(e) => {
            log::warn!("failed to read brand asset {}: {}", path.display(), e);
            BrandAsset::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_existing_asset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, b"logo-bytes").unwrap();

        assert_eq!(
            load_brand_asset(&path),
            BrandAsset::Found(b"logo-bytes".to_vec())
        );
    }

    #[test]
    fn missing_asset_degrades() {
        let dir = tempdir().unwrap();
        let asset = load_brand_asset(&dir.path().join("nope.png"));
        assert_eq!(asset, BrandAsset::Missing);
        assert!(asset.bytes().is_none());
    }
}
