use anyhow::{bail, Context, Result};
use image::io::Reader as ImageReader;
use vault_icons::canvas::Canvas;
use vault_icons::clipboard::{Layout, CLIP_COLOR, PAPER_LINE_COLOR};
use vault_icons::png_writer::chunks;

fn main() -> Result<()> {
    env_logger::init();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icons/icon128.png".to_string());

    println!("Checking icon: {}", path);

    let data = std::fs::read(&path).with_context(|| format!("Failed to read {path}"))?;
    let mut bad_crc = 0;
    for chunk in chunks(&data)? {
        let ok = chunk.crc_matches();
        if !ok {
            bad_crc += 1;
        }
        println!(
            "  {} {:>6} bytes  crc {}",
            chunk.tag_str(),
            chunk.payload.len(),
            if ok { "ok" } else { "MISMATCH" }
        );
    }

    let img = ImageReader::open(&path)?
        .decode()
        .context("Failed to decode image")?
        .to_rgba8();
    let (width, height) = img.dimensions();
    println!("Image dimensions: {}x{}", width, height);
    let Some(canvas) = Canvas::from_rgba_image(&img) else {
        bail!("Icon is not square");
    };

    let size = canvas.size() as i32;
    let layout = Layout::new(canvas.size());
    let transparent = canvas
        .pixels()
        .iter()
        .filter(|p| p.a == 0)
        .count();
    println!("Transparent pixels: {} of {}", transparent, canvas.pixels().len());

    if let Some(p) = canvas.get(size / 2, size * 3 / 4) {
        println!("\nBody sample: RGBA [{}, {}, {}, {}]", p.r, p.g, p.b, p.a);
        if p.a == 255 && p.b > p.r && p.b > p.g {
            println!("✓ Indigo body detected");
        } else {
            println!("⚠ Body does not look indigo");
        }
    }

    if canvas.get(size / 2, layout.margin) == Some(CLIP_COLOR) {
        println!("✓ Clip band detected near the top");
    } else {
        println!("⚠ No white clip band at row {}", layout.margin);
    }

    // Count runs of paper-line pixels down the column where every line starts.
    let mut bands = 0;
    let mut in_band = false;
    for y in 0..size {
        let is_line = canvas.get(layout.line_margin, y) == Some(PAPER_LINE_COLOR);
        if is_line && !in_band {
            bands += 1;
        }
        in_band = is_line;
    }
    println!("✓ {} paper line band(s) found", bands);

    if bad_crc > 0 {
        bail!("{bad_crc} chunk(s) failed the CRC check");
    }
    Ok(())
}
