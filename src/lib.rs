//! Procedural generator for the Clipboard Vault extension icons.
//!
//! [`clipboard::draw_icon`] paints a [`canvas::Canvas`] and
//! [`png_writer::encode_png`] turns it into a standalone PNG file.

pub mod canvas;
pub mod clipboard;
pub mod icon_gen;
pub mod manifest;
pub mod png_writer;
