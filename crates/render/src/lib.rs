//! Single-page PDF renderer for room records.
//!
//! Produces the fixed-layout "room details" export: banner with brand mark,
//! room name, one-line description, optional photo, two-column facility list
//! and a dated footer. Image and asset bytes are resolved by the caller; the
//! renderer only decides whether they can be embedded and degrades silently
//! when they cannot.

mod clock;
mod error;
mod fonts;
pub mod geometry;
mod image_xobject;
mod layout;
mod page;
mod renderer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::RenderError;
pub use fonts::Font;
pub use renderer::RoomPdfRenderer;
