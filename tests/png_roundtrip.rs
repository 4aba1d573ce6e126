use image::{ColorType, ImageFormat};
use vault_icons::canvas::{Canvas, Pixel};
use vault_icons::clipboard::draw_icon;
use vault_icons::png_writer::{chunks, encode_png, SIGNATURE};

const SIZES: [u32; 5] = [1, 2, 16, 48, 128];

/// Decoding the encoder output with the `image` crate yields the same pixels.
#[test]
fn decodes_to_identical_pixels() {
    for size in SIZES {
        let canvas = draw_icon(size);
        let data = encode_png(&canvas).expect("encoding should not fail");

        let decoded = image::load_from_memory_with_format(&data, ImageFormat::Png)
            .unwrap_or_else(|e| panic!("{size}px icon failed to decode: {e}"));
        assert_eq!(decoded.color(), ColorType::Rgba8, "{size}px color type");
        assert_eq!(
            decoded.to_rgba8(),
            canvas.to_rgba_image(),
            "{size}px pixels differ after decoding"
        );
    }
}

#[test]
fn header_declares_canvas_shape() {
    for size in SIZES {
        let data = encode_png(&draw_icon(size)).unwrap();
        assert_eq!(&data[..8], &SIGNATURE);

        let chunks = chunks(&data).unwrap();
        let ihdr = &chunks[0];
        assert_eq!(&ihdr.tag, b"IHDR");
        assert_eq!(ihdr.payload.len(), 13);
        assert_eq!(&ihdr.payload[0..4], &size.to_be_bytes(), "width");
        assert_eq!(&ihdr.payload[4..8], &size.to_be_bytes(), "height");
        assert_eq!(ihdr.payload[8], 8, "bit depth");
        assert_eq!(ihdr.payload[9], 6, "color type");
        assert_eq!(&ihdr.payload[10..], &[0, 0, 0]);
    }
}

/// Every stored CRC matches one recomputed independently over tag + payload.
#[test]
fn chunk_crcs_match() {
    for size in SIZES {
        let data = encode_png(&draw_icon(size)).unwrap();
        let chunks = chunks(&data).unwrap();
        assert_eq!(chunks.len(), 3);

        for chunk in &chunks {
            let mut hasher = crc32fast::Hasher::new();
            hasher.update(&chunk.tag);
            hasher.update(chunk.payload);
            assert_eq!(
                hasher.finalize(),
                chunk.stored_crc,
                "{size}px {} chunk",
                chunk.tag_str()
            );
        }
    }
}

#[test]
fn output_is_deterministic() {
    for size in SIZES {
        assert_eq!(draw_icon(size), draw_icon(size));
        assert_eq!(
            encode_png(&draw_icon(size)).unwrap(),
            encode_png(&draw_icon(size)).unwrap()
        );
    }
}

#[test]
fn every_size_fills_the_whole_grid() {
    for size in 1..=64 {
        let canvas = draw_icon(size);
        assert_eq!(canvas.size(), size);
        assert_eq!(canvas.pixels().len(), (size * size) as usize);
        assert_eq!(canvas.rows().count(), size as usize);
    }
}

#[test]
fn arbitrary_canvas_survives_encoding() {
    let mut canvas = Canvas::new(7);
    for y in 0..7 {
        for x in 0..7 {
            let v = (x * 7 + y) as u8;
            canvas.set(x, y, Pixel::rgba(v, 255 - v, v.wrapping_mul(3), v % 200));
        }
    }

    let data = encode_png(&canvas).unwrap();
    let decoded = image::load_from_memory(&data).unwrap().to_rgba8();
    assert_eq!(decoded, canvas.to_rgba_image());
}
