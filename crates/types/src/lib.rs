pub mod color;
pub mod record;

pub use color::Color;
pub use record::RoomRecord;
