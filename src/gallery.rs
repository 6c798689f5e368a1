// SPDX-License-Identifier: MPL-2.0
//! Gallery state controller.
//!
//! Owns the image list shown by the grid together with the scroll position
//! pair (first visible index, pixel offset within that row). The position is
//! written through to the injected [`PositionStore`] on every update and
//! read back exactly once, when the controller is built, so the grid resumes
//! where the user left it after a restart.

use crate::app::position_store::PositionStore;
use crate::catalog::{ImageCatalog, ImageRecord};
use std::fmt;

/// Store key for the first visible item index.
pub const KEY_SCROLL_INDEX: &str = "scroll-index";
/// Store key for the pixel offset within the first visible row.
pub const KEY_SCROLL_OFFSET: &str = "scroll-offset";

/// Scroll position of the gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryPosition {
    pub first_visible_index: usize,
    pub first_visible_offset: u32,
}

/// State controller for the gallery screen.
///
/// One instance is exclusively owned by one gallery screen instance; the
/// persisted store is a passive backing and never mutates state on its own.
pub struct GalleryController {
    images: Vec<ImageRecord>,
    position: GalleryPosition,
    revision: u64,
    store: Box<dyn PositionStore>,
}

impl fmt::Debug for GalleryController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryController")
            .field("image_count", &self.images.len())
            .field("position", &self.position)
            .field("revision", &self.revision)
            .finish()
    }
}

impl GalleryController {
    /// Builds the controller: images from the catalog, position restored
    /// from the store or defaulting to `(0, 0)`.
    ///
    /// An empty catalog is not an error; the presentation renders it as an
    /// explicit empty state. A restored index past the end of the current
    /// catalog is clamped so the invariant `index < len` holds whenever the
    /// list is non-empty.
    pub fn new(catalog: &ImageCatalog, store: Box<dyn PositionStore>) -> Self {
        let images = catalog.images().to_vec();

        let position = if images.is_empty() {
            GalleryPosition::default()
        } else {
            let index = store.load(KEY_SCROLL_INDEX).unwrap_or(0).max(0) as usize;
            let offset = store.load(KEY_SCROLL_OFFSET).unwrap_or(0).max(0) as u32;
            GalleryPosition {
                first_visible_index: index.min(images.len() - 1),
                first_visible_offset: offset,
            }
        };

        Self {
            images,
            position,
            revision: 0,
            store,
        }
    }

    /// Updates the scroll position and writes it through to the store.
    ///
    /// Idempotent and last-write-wins. Indices are not validated against the
    /// image list because the grid only ever reports indices it currently
    /// renders. The revision counter is bumped on every call, including
    /// calls that store an unchanged value.
    pub fn update_scroll_position(&mut self, first_visible_index: usize, first_visible_offset: u32) {
        self.position = GalleryPosition {
            first_visible_index,
            first_visible_offset,
        };
        self.store
            .save(KEY_SCROLL_INDEX, first_visible_index as i64);
        self.store
            .save(KEY_SCROLL_OFFSET, i64::from(first_visible_offset));
        self.revision += 1;
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn position(&self) -> GalleryPosition {
        self.position
    }

    /// Monotonic change counter; observers compare it to detect writes.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
