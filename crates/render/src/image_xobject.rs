use crate::error::RenderError;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::{ColorType, ImageFormat};
use lopdf::{Stream, dictionary};
use std::io::Write;

/// An image decoded and packaged as a PDF image XObject stream.
pub(crate) struct PreparedImage {
    pub stream: Stream,
    pub width: u32,
    pub height: u32,
}

/// Decodes `bytes` and builds the XObject. RGB JPEGs keep their original
/// bytes behind a DCTDecode filter; everything else is re-encoded as
/// flate-compressed raw RGB.
pub(crate) fn prepare_image(bytes: &[u8]) -> Result<PreparedImage, RenderError> {
    let format = image::guess_format(bytes).map_err(|e| RenderError::Image(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| RenderError::Image(e.to_string()))?;
    let (width, height) = (decoded.width(), decoded.height());

    let stream = if format == ImageFormat::Jpeg && decoded.color() == ColorType::Rgb8 {
        Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            bytes.to_vec(),
        )
    } else {
        let rgb = decoded.to_rgb8();
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(rgb.as_raw())?;
        let data = encoder.finish()?;
        Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            data,
        )
    };

    Ok(PreparedImage { stream, width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::Object;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 10, 10]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn png_is_reencoded_as_flate_rgb() {
        let prepared = prepare_image(&png_bytes(4, 3)).unwrap();
        assert_eq!(prepared.width, 4);
        assert_eq!(prepared.height, 3);
        assert_eq!(
            prepared.stream.dict.get(b"Filter").unwrap(),
            &Object::Name(b"FlateDecode".to_vec())
        );
    }

    #[test]
    fn jpeg_keeps_original_bytes() {
        let img = image::RgbImage::from_pixel(5, 5, image::Rgb([1, 2, 3]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Jpeg).unwrap();
        let bytes = buffer.into_inner();

        let prepared = prepare_image(&bytes).unwrap();
        assert_eq!(
            prepared.stream.dict.get(b"Filter").unwrap(),
            &Object::Name(b"DCTDecode".to_vec())
        );
        assert_eq!(prepared.stream.content, bytes);
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        let result = prepare_image(b"definitely not an image");
        assert!(matches!(result, Err(RenderError::Image(_))));
    }
}
