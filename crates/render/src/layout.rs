//! Fixed single-page composition of the room details export.

use crate::fonts::{self, Font};
use crate::geometry::{self, Rect};
use crate::page::PageContent;
use chrono::{DateTime, Datelike, Utc};
use hugo_types::{Color, RoomRecord};
use lopdf::content::Content;

pub(crate) const ROOM_IMAGE_NAME: &str = "Im0";
pub(crate) const BRAND_IMAGE_NAME: &str = "Im1";

const ELLIPSIS: &str = "...";
const BLACK: Color = Color { r: 0, g: 0, b: 0 };
const GRAY: Color = Color { r: 128, g: 128, b: 128 };
const LABEL_GRAY: Color = Color { r: 160, g: 160, b: 160 };

/// Pixel dimensions of an already-prepared image XObject.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ImageDims {
    pub width: u32,
    pub height: u32,
}

/// Splits the facility list at its midpoint: the left column takes the
/// first `ceil(n/2)` items, the right column the remainder.
pub(crate) fn split_columns(items: &[String]) -> (&[String], &[String]) {
    items.split_at(items.len().div_ceil(2))
}

/// Truncates `text` one character at a time from the end, appending an
/// ellipsis, until it fits within `max_width` at the given face and size.
/// Text that already fits is returned unchanged.
pub(crate) fn truncate_to_width(text: &str, font: Font, size: f32, max_width: f32) -> String {
    if fonts::text_width(text, font, size) <= max_width {
        return text.to_string();
    }
    let mut truncated: String = text.to_string();
    while truncated.pop().is_some() {
        let candidate_width =
            fonts::text_width(&truncated, font, size) + fonts::text_width(ELLIPSIS, font, size);
        if candidate_width <= max_width {
            truncated.push_str(ELLIPSIS);
            return truncated;
        }
    }
    ELLIPSIS.to_string()
}

/// Largest rectangle with the image's aspect ratio that fits inside
/// `bounds`, centered on both axes.
pub(crate) fn fit_box(img_width: u32, img_height: u32, bounds: Rect) -> Rect {
    if img_width == 0 || img_height == 0 {
        return Rect { width: 0.0, height: 0.0, ..bounds };
    }
    let scale = (bounds.width / img_width as f32).min(bounds.height / img_height as f32);
    let width = img_width as f32 * scale;
    let height = img_height as f32 * scale;
    Rect {
        x: bounds.x + (bounds.width - width) / 2.0,
        y: bounds.y + (bounds.height - height) / 2.0,
        width,
        height,
    }
}

fn draw_banner(page: &mut PageContent, brand: Option<ImageDims>) {
    page.fill_rect(geometry::BANNER, GRAY);
    match brand {
        Some(dims) => {
            page.draw_image(
                BRAND_IMAGE_NAME,
                fit_box(dims.width, dims.height, geometry::BRAND_BOX),
            );
        }
        None => {
            page.draw_text(
                geometry::BRAND_TEXT_X,
                geometry::BRAND_NAME_BASELINE,
                "THE HUGO",
                Font::HelveticaBold,
                geometry::BRAND_NAME_SIZE,
                Color::WHITE,
            );
            page.draw_text(
                geometry::BRAND_TEXT_X,
                geometry::BRAND_SUB_BASELINE,
                "GARY LANE",
                Font::Helvetica,
                geometry::BRAND_SUB_SIZE,
                Color::WHITE,
            );
        }
    }
}

fn draw_facilities(page: &mut PageContent, facilities: &[String]) {
    page.draw_text(
        geometry::MARGIN,
        geometry::FACILITIES_HEADING_BASELINE,
        "Facilities",
        Font::HelveticaBold,
        geometry::FACILITIES_HEADING_SIZE,
        BLACK,
    );
    let (left, right) = split_columns(facilities);
    for (column_x, column) in [
        (geometry::FACILITY_LEFT_X, left),
        (geometry::FACILITY_RIGHT_X, right),
    ] {
        for (row, item) in column.iter().enumerate() {
            let baseline =
                geometry::FACILITY_FIRST_BASELINE - row as f32 * geometry::FACILITY_ROW_STEP;
            page.draw_text(
                column_x,
                baseline,
                &format!("\u{2022} {item}"),
                Font::Helvetica,
                geometry::FACILITY_SIZE,
                BLACK,
            );
        }
    }
}

fn draw_right_aligned(page: &mut PageContent, baseline: f32, text: &str, font: Font, size: f32, color: Color) {
    let x = geometry::MARGIN + geometry::CONTENT_WIDTH - fonts::text_width(text, font, size);
    page.draw_text(x, baseline, text, font, size, color);
}

fn draw_footer(page: &mut PageContent, now: DateTime<Utc>) {
    page.draw_text(
        geometry::MARGIN,
        geometry::FOOTER_BASELINE,
        &format!("\u{00A9} The Hugo {}", now.year()),
        Font::Helvetica,
        geometry::FOOTER_SIZE,
        GRAY,
    );
    draw_right_aligned(
        page,
        geometry::FOOTER_BASELINE,
        &now.format("%d/%m/%y").to_string(),
        Font::Helvetica,
        geometry::FOOTER_SIZE,
        GRAY,
    );
}

/// Produces the page's full content stream. Images are referenced by
/// resource name only; the caller registered the matching XObjects.
pub(crate) fn compose(
    record: &RoomRecord,
    room_image: Option<ImageDims>,
    brand_image: Option<ImageDims>,
    now: DateTime<Utc>,
) -> Content {
    let mut page = PageContent::new();

    draw_right_aligned(
        &mut page,
        geometry::EXPORT_LABEL_BASELINE,
        "PDF Export",
        Font::Helvetica,
        geometry::EXPORT_LABEL_SIZE,
        LABEL_GRAY,
    );

    draw_banner(&mut page, brand_image);

    page.draw_text(
        geometry::MARGIN,
        geometry::NAME_BASELINE,
        &record.name,
        Font::HelveticaBold,
        geometry::NAME_SIZE,
        BLACK,
    );

    let description = truncate_to_width(
        &record.description,
        Font::Helvetica,
        geometry::DESCRIPTION_SIZE,
        geometry::CONTENT_WIDTH,
    );
    page.draw_text(
        geometry::MARGIN,
        geometry::DESCRIPTION_BASELINE,
        &description,
        Font::Helvetica,
        geometry::DESCRIPTION_SIZE,
        BLACK,
    );

    if let Some(dims) = room_image {
        page.draw_image(
            ROOM_IMAGE_NAME,
            fit_box(dims.width, dims.height, geometry::IMAGE_BOX),
        );
    }

    draw_facilities(&mut page, &record.facility_list);
    draw_footer(&mut page, now);

    page.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_text_is_not_truncated() {
        let text = "Cosy double room";
        assert_eq!(
            truncate_to_width(text, Font::Helvetica, 14.0, geometry::CONTENT_WIDTH),
            text
        );
    }

    #[test]
    fn long_text_gains_ellipsis_and_fits() {
        let text = "An exceptionally long description ".repeat(10);
        let result = truncate_to_width(&text, Font::Helvetica, 14.0, geometry::CONTENT_WIDTH);
        assert!(result.ends_with(ELLIPSIS));
        let prefix = &result[..result.len() - ELLIPSIS.len()];
        assert!(text.starts_with(prefix));
        assert!(fonts::text_width(&result, Font::Helvetica, 14.0) <= geometry::CONTENT_WIDTH);
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(truncate_to_width("", Font::Helvetica, 14.0, 100.0), "");
    }

    #[test]
    fn columns_split_at_midpoint() {
        let items: Vec<String> = (0..5).map(|i| format!("f{i}")).collect();
        let (left, right) = split_columns(&items);
        assert_eq!(left, &items[..3]);
        assert_eq!(right, &items[3..]);
    }

    #[test]
    fn empty_list_splits_empty() {
        let (left, right) = split_columns(&[]);
        assert!(left.is_empty());
        assert!(right.is_empty());
    }

    #[test]
    fn wide_image_is_pinned_to_box_width() {
        let bounds = geometry::IMAGE_BOX;
        let fitted = fit_box(1000, 200, bounds);
        assert_eq!(fitted.width, bounds.width);
        assert_eq!(fitted.height, bounds.width / 5.0);
        assert_eq!(fitted.x, bounds.x);
        assert!((fitted.y - (bounds.y + (bounds.height - fitted.height) / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn tall_image_is_pinned_to_box_height() {
        let bounds = geometry::IMAGE_BOX;
        let fitted = fit_box(100, 400, bounds);
        assert_eq!(fitted.height, bounds.height);
        assert_eq!(fitted.width, bounds.height / 4.0);
        assert!((fitted.x - (bounds.x + (bounds.width - fitted.width) / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn degenerate_image_collapses() {
        let fitted = fit_box(0, 10, geometry::IMAGE_BOX);
        assert_eq!(fitted.width, 0.0);
        assert_eq!(fitted.height, 0.0);
    }

    proptest! {
        #[test]
        fn truncation_never_exceeds_the_span(text in ".{0,400}", max in 20.0f32..600.0) {
            let result = truncate_to_width(&text, Font::Helvetica, 14.0, max);
            prop_assert!(fonts::text_width(&result, Font::Helvetica, 14.0) <= max);
        }

        #[test]
        fn truncation_preserves_a_prefix(text in "[ -~]{0,400}") {
            let result = truncate_to_width(&text, Font::Helvetica, 14.0, 200.0);
            let prefix = result.strip_suffix(ELLIPSIS).unwrap_or(&result);
            prop_assert!(text.starts_with(prefix));
        }

        #[test]
        fn column_sizes_are_balanced(n in 0usize..40) {
            let items: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            let (left, right) = split_columns(&items);
            prop_assert_eq!(left.len(), n.div_ceil(2));
            prop_assert_eq!(right.len(), n / 2);
            let rejoined: Vec<_> = left.iter().chain(right.iter()).collect();
            prop_assert!(rejoined.into_iter().eq(items.iter()));
        }
    }
}
