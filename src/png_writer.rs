//! Minimal PNG encoder for 8-bit RGBA canvases.
//!
//! The output is a signature followed by exactly three chunks: `IHDR`, a single
//! `IDAT` holding the zlib stream of unfiltered scanlines, and `IEND`. Scanlines
//! always use filter type 0 so the same canvas always produces the same bytes.

use crate::canvas::Canvas;
use anyhow::{bail, Result};
use flate2::{write::ZlibEncoder, Compression};
use std::io::Write;

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";

pub const BIT_DEPTH: u8 = 8;
/// Truecolour with alpha.
pub const COLOR_TYPE_RGBA: u8 = 6;

const FILTER_NONE: u8 = 0;

/// Encodes `canvas` into a complete PNG file image.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_png(canvas, &mut buf)?;
    Ok(buf)
}

/// Writes `canvas` as a PNG to `w`.
pub fn write_png<W: Write>(canvas: &Canvas, mut w: W) -> Result<()> {
    w.write_all(&SIGNATURE)?;
    write_chunk(&mut w, &IHDR, &header_payload(canvas.width(), canvas.height()))?;

    let raw = raw_scanlines(canvas);
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&raw)?;
    let compressed = encoder.finish()?;
    log::debug!(
        "{}px canvas: {} raw scanline bytes, {} compressed",
        canvas.size(),
        raw.len(),
        compressed.len()
    );

    write_chunk(&mut w, &IDAT, &compressed)?;
    write_chunk(&mut w, &IEND, &[])?;
    Ok(())
}

fn header_payload(width: u32, height: u32) -> [u8; 13] {
    let mut ihdr = [0u8; 13];
    ihdr[0..4].copy_from_slice(&width.to_be_bytes());
    ihdr[4..8].copy_from_slice(&height.to_be_bytes());
    ihdr[8] = BIT_DEPTH;
    ihdr[9] = COLOR_TYPE_RGBA;
    // compression, filter and interlace methods stay 0
    ihdr
}

/// Each row is a filter-type byte followed by the row's RGBA bytes.
fn raw_scanlines(canvas: &Canvas) -> Vec<u8> {
    let row_len = 1 + canvas.width() as usize * 4;
    let mut raw = Vec::with_capacity(row_len * canvas.height() as usize);
    for row in canvas.rows() {
        raw.push(FILTER_NONE);
        for pixel in row {
            raw.extend_from_slice(&pixel.to_bytes());
        }
    }
    raw
}

/// CRC-32 over the chunk tag followed by its payload.
pub fn chunk_crc(tag: &[u8; 4], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(payload);
    hasher.finalize()
}

fn write_chunk<W: Write>(w: &mut W, tag: &[u8; 4], payload: &[u8]) -> Result<()> {
    w.write_all(&(payload.len() as u32).to_be_bytes())?;
    w.write_all(tag)?;
    w.write_all(payload)?;
    w.write_all(&chunk_crc(tag, payload).to_be_bytes())?;
    Ok(())
}

/// One chunk read back out of an encoded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub tag: [u8; 4],
    pub payload: &'a [u8],
    pub stored_crc: u32,
}

impl Chunk<'_> {
    pub fn tag_str(&self) -> &str {
        std::str::from_utf8(&self.tag).unwrap_or("????")
    }

    pub fn crc_matches(&self) -> bool {
        chunk_crc(&self.tag, self.payload) == self.stored_crc
    }
}

/// Splits an encoded PNG into its chunks, checking the signature and framing.
pub fn chunks(data: &[u8]) -> Result<Vec<Chunk<'_>>> {
    let Some(mut rest) = data.strip_prefix(&SIGNATURE[..]) else {
        bail!("Missing PNG signature");
    };

    let mut chunks = Vec::new();
    while !rest.is_empty() {
        if rest.len() < 12 {
            bail!("Truncated chunk header ({} bytes left)", rest.len());
        }
        let len = u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]) as usize;
        let tag = [rest[4], rest[5], rest[6], rest[7]];
        let Some(body) = rest.get(8..8 + len + 4) else {
            bail!(
                "Chunk {} claims {len} bytes but the file ends early",
                String::from_utf8_lossy(&tag)
            );
        };
        let (payload, crc) = body.split_at(len);
        chunks.push(Chunk {
            tag,
            payload,
            stored_crc: u32::from_be_bytes([crc[0], crc[1], crc[2], crc[3]]),
        });
        rest = &rest[12 + len..];
    }
    Ok(chunks)
}
