// SPDX-License-Identifier: MPL-2.0
//! Image catalog module supplying the ordered list of images shown by the
//! gallery and the slider.
//!
//! The catalog is loaded once at startup and never mutated afterwards. Both
//! screens read the same catalog; ordering is stable across calls because
//! indices double as navigation identity between the two screens.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::path::Path;

/// A single image in the catalog.
///
/// `id` is unique and stable for the lifetime of the catalog. `alt_text` is
/// the accessibility description surfaced by the slider caption.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub id: u32,
    pub handle: Handle,
    pub alt_text: String,
}

/// Ordered, immutable collection of [`ImageRecord`]s.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    records: Vec<ImageRecord>,
}

/// File extensions accepted by the directory catalog.
const SUPPORTED_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff"];

/// Number of generated images in the built-in catalog.
const BUILTIN_COUNT: u32 = 15;

/// Shape of a generated placeholder image.
#[derive(Debug, Clone, Copy)]
enum PlaceholderKind {
    Landscape,
    Portrait,
    Square,
}

impl PlaceholderKind {
    fn for_position(position: u32) -> Self {
        match position % 3 {
            0 => PlaceholderKind::Landscape,
            1 => PlaceholderKind::Portrait,
            _ => PlaceholderKind::Square,
        }
    }

    fn dimensions(self) -> (u32, u32) {
        match self {
            PlaceholderKind::Landscape => (480, 320),
            PlaceholderKind::Portrait => (320, 480),
            PlaceholderKind::Square => (400, 400),
        }
    }

    fn label(self) -> &'static str {
        match self {
            PlaceholderKind::Landscape => "Landscape",
            PlaceholderKind::Portrait => "Portrait",
            PlaceholderKind::Square => "Square",
        }
    }
}

/// Base colors cycled through by the generated placeholders.
const PLACEHOLDER_COLORS: [[u8; 3]; 5] = [
    [0x4c, 0x78, 0xc4], // slate blue
    [0x5f, 0x9e, 0x6e], // moss green
    [0xb0, 0x6a, 0x5a], // clay red
    [0x8a, 0x6f, 0xa8], // muted violet
    [0xc0, 0x9b, 0x52], // ochre
];

impl ImageCatalog {
    /// An empty catalog; the screens render their explicit empty states.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Builds the static in-memory catalog of generated placeholder images.
    ///
    /// Ids run 1..=15 and alternate landscape, portrait and square shapes,
    /// mirroring the alt-text naming of the original data set.
    pub fn builtin() -> Self {
        let records = (0..BUILTIN_COUNT)
            .map(|position| {
                let id = position + 1;
                let kind = PlaceholderKind::for_position(position);
                let (width, height) = kind.dimensions();
                ImageRecord {
                    id,
                    handle: generated_handle(position, width, height),
                    alt_text: format!("{} photo {}", kind.label(), id),
                }
            })
            .collect();

        Self { records }
    }

    /// Builds a catalog from the image files of one directory.
    ///
    /// This is the seam to a real content source. Entries are sorted by file
    /// name so repeated scans of an unchanged directory yield the same order.
    /// A directory without supported images yields an empty catalog, which
    /// the presentation renders as an explicit empty state.
    pub fn from_directory(directory: &Path) -> Result<Self> {
        let mut paths = Vec::new();

        for entry in std::fs::read_dir(directory)
            .map_err(|e| Error::Catalog(format!("{}: {}", directory.display(), e)))?
        {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                paths.push(path);
            }
        }

        paths.sort();

        let records = paths
            .into_iter()
            .enumerate()
            .map(|(position, path)| {
                let alt_text = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ImageRecord {
                    id: position as u32 + 1,
                    handle: Handle::from_path(&path),
                    alt_text,
                }
            })
            .collect();

        Ok(Self { records })
    }

    /// Returns the ordered image list.
    pub fn images(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Checks whether a path carries a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Produces an in-memory RGBA handle for one placeholder image.
///
/// Solid base color with a vertical shade so the tiles read as distinct
/// pictures rather than flat swatches. Fully deterministic per position.
fn generated_handle(position: u32, width: u32, height: u32) -> Handle {
    let [r, g, b] = PLACEHOLDER_COLORS[position as usize % PLACEHOLDER_COLORS.len()];
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);

    for y in 0..height {
        // Darken towards the bottom, at most ~35%.
        let shade = 1.0 - 0.35 * (y as f32 / height as f32);
        let row = [
            (r as f32 * shade) as u8,
            (g as f32 * shade) as u8,
            (b as f32 * shade) as u8,
            0xff,
        ];
        for _ in 0..width {
            pixels.extend_from_slice(&row);
        }
    }

    Handle::from_rgba(width, height, pixels)
}
