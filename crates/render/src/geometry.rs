//! Fixed page geometry for the room details export.
//!
//! All values are PDF user-space points on a US Letter page, origin at the
//! bottom-left. The layout is single-page and does not reflow.

/// An axis-aligned box in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 30.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

pub const EXPORT_LABEL_SIZE: f32 = 12.0;
pub const EXPORT_LABEL_BASELINE: f32 = 752.0;

pub const BANNER: Rect = Rect { x: MARGIN, y: 690.0, width: CONTENT_WIDTH, height: 50.0 };
pub const BRAND_BOX: Rect = Rect { x: 40.0, y: 694.0, width: 120.0, height: 42.0 };
pub const BRAND_TEXT_X: f32 = 46.0;
pub const BRAND_NAME_SIZE: f32 = 14.0;
pub const BRAND_NAME_BASELINE: f32 = 718.0;
pub const BRAND_SUB_SIZE: f32 = 8.0;
pub const BRAND_SUB_BASELINE: f32 = 704.0;

pub const NAME_SIZE: f32 = 28.0;
pub const NAME_BASELINE: f32 = 648.0;

pub const DESCRIPTION_SIZE: f32 = 14.0;
pub const DESCRIPTION_BASELINE: f32 = 622.0;

pub const IMAGE_BOX: Rect = Rect { x: 56.0, y: 300.0, width: 500.0, height: 300.0 };

pub const FACILITIES_HEADING_SIZE: f32 = 18.0;
pub const FACILITIES_HEADING_BASELINE: f32 = 268.0;
pub const FACILITY_SIZE: f32 = 12.0;
pub const FACILITY_FIRST_BASELINE: f32 = 244.0;
pub const FACILITY_ROW_STEP: f32 = 16.0;
pub const FACILITY_LEFT_X: f32 = 56.0;
pub const FACILITY_RIGHT_X: f32 = 306.0;

pub const FOOTER_SIZE: f32 = 9.0;
pub const FOOTER_BASELINE: f32 = 40.0;
