//! Room PDF export for the Hugo Hotel backend.
//!
//! [`RoomExporter`] is the public entry point: it wires image resolution,
//! the brand asset and the page renderer together and turns a
//! [`RoomRecord`] into a finished single-page PDF. Only document assembly
//! can fail; missing or malformed auxiliary content degrades the output
//! instead of aborting it.

mod exporter;

pub use exporter::{ExporterConfig, RoomExporter};
pub use hugo_render::{Clock, FixedClock, RenderError, SystemClock};
pub use hugo_resource::{BrandAsset, RemoteFetcher};
pub use hugo_types::RoomRecord;
