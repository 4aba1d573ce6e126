//! Icon section of the browser extension manifest.
//!
//! The extension's `manifest.json` references the generated files twice: once
//! under `icons` and once as the toolbar action's `default_icon`. This module
//! produces that fragment so it can be pasted or merged into the manifest.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

pub const MANIFEST_FILE_NAME: &str = "manifest_icons.json";

/// Map from decimal icon size to the icon path relative to the extension root.
///
/// Keys are ordered by numeric size, not lexically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IconMap(BTreeMap<u32, String>);

impl IconMap {
    pub fn insert(&mut self, size: u32, path: String) {
        self.0.insert(size, path);
    }
}

impl Serialize for IconMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (size, path) in &self.0 {
            map.serialize_entry(&size.to_string(), path)?;
        }
        map.end()
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ManifestIcons {
    pub icons: IconMap,
    pub action: Action,
}

#[derive(Serialize, Debug, Clone)]
pub struct Action {
    pub default_icon: IconMap,
}

impl ManifestIcons {
    /// Builds the fragment for icons stored under `icons_dir` (relative to the extension root).
    pub fn new(icons_dir: &str, sizes: &[u32]) -> Self {
        let mut icons = IconMap::default();
        for &size in sizes {
            icons.insert(size, format!("{icons_dir}/{}", icon_file_name(size)));
        }

        Self {
            action: Action {
                default_icon: icons.clone(),
            },
            icons,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest icons")
    }
}

/// File name of the icon for `size`, e.g. `icon16.png`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

pub fn write_manifest_icons(out_dir: &Path, manifest: &ManifestIcons) -> Result<()> {
    let path = out_dir.join(MANIFEST_FILE_NAME);
    std::fs::write(&path, manifest.to_json()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
