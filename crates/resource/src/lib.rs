//! Resource resolution for the room document renderer.
//!
//! Turns the two kinds of image reference a room record can carry (inline
//! data URI or remote URL) into raw bytes, and loads the optional brand
//! asset from disk. All failures here are reported as [`ResourceError`];
//! the exporter decides whether to degrade or abort.

mod brand;
mod error;
mod fetch;
mod resolver;
mod source;

pub use brand::{BrandAsset, load_brand_asset};
pub use error::ResourceError;
pub use fetch::{HttpFetcher, RemoteFetcher};
pub use resolver::ImageResolver;
pub use source::ImageSource;
