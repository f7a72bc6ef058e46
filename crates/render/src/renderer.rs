use crate::clock::Clock;
use crate::error::RenderError;
use crate::fonts::Font;
use crate::geometry;
use crate::image_xobject::{self, PreparedImage};
use crate::layout::{self, ImageDims};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use hugo_types::RoomRecord;
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use std::io::{Cursor, Write};

/// Renders a room record to a single-page PDF.
///
/// Stateless; one call produces one document. Image and brand asset bytes
/// are supplied pre-resolved by the caller. Bytes that fail to decode are
/// logged and skipped, only document assembly itself can fail.
#[derive(Debug, Default)]
pub struct RoomPdfRenderer;

impl RoomPdfRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        record: &RoomRecord,
        image: Option<&[u8]>,
        brand: Option<&[u8]>,
        clock: &dyn Clock,
    ) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let room_image = prepare_optional(image, "room image");
        let brand_image = prepare_optional(brand, "brand asset");

        let content = layout::compose(
            record,
            room_image.as_ref().map(dims_of),
            brand_image.as_ref().map(dims_of),
            clock.now(),
        );

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content.encode()?)?;
        let content_id = doc.add_object(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            encoder.finish()?,
        ));

        let mut fonts = Dictionary::new();
        for font in [Font::Helvetica, Font::HelveticaBold] {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }

        let mut resources = dictionary! { "Font" => fonts };
        let mut xobjects = Dictionary::new();
        for (name, prepared) in [
            (layout::ROOM_IMAGE_NAME, room_image),
            (layout::BRAND_IMAGE_NAME, brand_image),
        ] {
            if let Some(prepared) = prepared {
                xobjects.set(name, doc.add_object(prepared.stream));
            }
        }
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                geometry::PAGE_WIDTH.into(),
                geometry::PAGE_HEIGHT.into(),
            ],
            "Contents" => content_id,
            "Resources" => resources,
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Cursor::new(Vec::new());
        doc.save_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }
}

fn prepare_optional(bytes: Option<&[u8]>, what: &str) -> Option<PreparedImage> {
    match bytes {
        Some(bytes) => match image_xobject::prepare_image(bytes) {
            Ok(prepared) => Some(prepared),
            Err(err) => {
                log::warn!("skipping {what}: {err}");
                None
            }
        },
        None => None,
    }
}

fn dims_of(prepared: &PreparedImage) -> ImageDims {
    ImageDims {
        width: prepared.width,
        height: prepared.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap())
    }

    #[test]
    fn renders_a_pdf_without_images() {
        let record = RoomRecord::new("Deluxe Suite", "A quiet room over the garden.");
        let bytes = RoomPdfRenderer::new()
            .render(&record, None, None, &clock())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }

    fn page_resources(doc: &Document) -> &Dictionary {
        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        page.get(b"Resources").and_then(Object::as_dict).unwrap()
    }

    #[test]
    fn undecodable_image_bytes_are_skipped() {
        let record = RoomRecord::new("Single", "Compact city-side room.");
        let bytes = RoomPdfRenderer::new()
            .render(&record, Some(b"not an image"), Some(b"nor this"), &clock())
            .unwrap();
        assert!(!bytes.is_empty());
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(!page_resources(&doc).has(b"XObject"));
    }

    #[test]
    fn valid_image_bytes_become_an_xobject() {
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([0, 128, 255]));
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, image::ImageFormat::Png).unwrap();

        let record = RoomRecord::new("Loft", "Top floor, skylight.");
        let bytes = RoomPdfRenderer::new()
            .render(&record, Some(&png.into_inner()), None, &clock())
            .unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let xobjects = page_resources(&doc)
            .get(b"XObject")
            .and_then(Object::as_dict)
            .unwrap();
        assert!(xobjects.has(b"Im0"));
        assert!(!xobjects.has(b"Im1"));
    }
}
