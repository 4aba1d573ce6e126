use crate::clipboard::draw_icon;
use crate::manifest::{icon_file_name, write_manifest_icons, ManifestIcons, MANIFEST_FILE_NAME};
use crate::png_writer::write_png;
use anyhow::{bail, Context, Result};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Sizes written when none are requested.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Largest edge length accepted; keeps pixel counts and layout math in range.
pub const MAX_SIZE: u32 = 16384;

pub const DEFAULT_OUTPUT_DIR_NAME: &str = "icons";

#[derive(Debug, Clone)]
pub struct Options {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub manifest: bool,
    pub quiet: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: default_output_dir(),
            sizes: DEFAULT_SIZES.to_vec(),
            manifest: false,
            quiet: false,
        }
    }
}

/// `icons/` next to the crate's own manifest, fixed when the binary is built.
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_OUTPUT_DIR_NAME)
}

/// Rasterizes and writes every requested size, stopping at the first error.
///
/// Returns the paths written, in order.
pub fn generate_icons(options: &Options) -> Result<Vec<PathBuf>> {
    if let Some(&size) = options.sizes.iter().find(|&&s| s == 0 || s > MAX_SIZE) {
        bail!("Icon size {size} is out of range (1..={MAX_SIZE})");
    }

    log::debug!("writing icons to {}", options.output.display());
    create_dir_all(&options.output).context("Can't create output directory")?;

    let mut written = Vec::with_capacity(options.sizes.len() + 1);
    for &size in &options.sizes {
        let path = options.output.join(icon_file_name(size));
        save_icon(size, &path)?;
        report(options, &path);
        written.push(path);
    }

    if options.manifest {
        let icons_dir = options
            .output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR_NAME.to_string());
        write_manifest_icons(&options.output, &ManifestIcons::new(&icons_dir, &options.sizes))?;

        let path = options.output.join(MANIFEST_FILE_NAME);
        report(options, &path);
        written.push(path);
    }

    if !options.quiet {
        println!("\nAll icons generated successfully!");
    }
    Ok(written)
}

fn save_icon(size: u32, path: &Path) -> Result<()> {
    let canvas = draw_icon(size);

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(&canvas, &mut out_file)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn report(options: &Options, path: &Path) {
    if !options.quiet {
        println!("✓ Generated {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_extension_sizes() {
        let options = Options::default();
        assert_eq!(options.sizes, [16, 48, 128]);
        assert!(options.output.ends_with("icons"));
        assert!(!options.manifest);
    }

    #[test]
    fn rejects_out_of_range_sizes_before_touching_disk() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let dir = temp_dir.path().join("icons");

        for sizes in [vec![16, MAX_SIZE + 1], vec![0], vec![u32::MAX]] {
            let options = Options {
                output: dir.clone(),
                sizes,
                manifest: false,
                quiet: true,
            };
            let err = generate_icons(&options).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{err}");
            assert!(!dir.exists());
        }
    }

    #[test]
    fn overwrites_existing_files() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();
        let path = dir.join(icon_file_name(16));
        std::fs::write(&path, vec![0u8; 100_000]).unwrap();

        let options = Options {
            output: dir,
            sizes: vec![16],
            manifest: false,
            quiet: true,
        };
        let written = generate_icons(&options).unwrap();

        assert_eq!(written, [path.clone()]);
        let data = std::fs::read(&path).unwrap();
        assert!(data.len() < 100_000);
        assert_eq!(&data[..8], &crate::png_writer::SIGNATURE);
    }
}
