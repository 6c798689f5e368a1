// SPDX-License-Identifier: MPL-2.0
//! Slider state controller.
//!
//! Owns the image list shown fullscreen and the current page index. The page
//! is clamped into range whenever it enters from outside (route argument,
//! restored store value) and written through to the injected
//! [`PositionStore`] on every change. Page-change requests from the UI go
//! through [`SliderController::next_page`] / [`SliderController::previous_page`],
//! which consult the configured [`EdgeBehavior`].

use crate::app::position_store::PositionStore;
use crate::catalog::{ImageCatalog, ImageRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store key for the current page index.
pub const KEY_CURRENT_PAGE: &str = "current-page";

/// Policy for navigation attempts past the first or last image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeBehavior {
    /// Stop at the first and last image.
    #[default]
    Block,
    /// Navigating past the last image returns to the first, and vice versa.
    WrapAround,
}

/// State controller for the slider screen.
pub struct SliderController {
    images: Vec<ImageRecord>,
    current_page: usize,
    edge_behavior: EdgeBehavior,
    revision: u64,
    store: Box<dyn PositionStore>,
}

impl fmt::Debug for SliderController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderController")
            .field("image_count", &self.images.len())
            .field("current_page", &self.current_page)
            .field("edge_behavior", &self.edge_behavior)
            .field("revision", &self.revision)
            .finish()
    }
}

impl SliderController {
    /// Builds the controller: images from the catalog, page restored from
    /// the store or defaulting to 0.
    ///
    /// A restored page outside the current catalog range is clamped so the
    /// invariant `0 <= page <= len - 1` holds for non-empty lists.
    pub fn new(
        catalog: &ImageCatalog,
        store: Box<dyn PositionStore>,
        edge_behavior: EdgeBehavior,
    ) -> Self {
        let images = catalog.images().to_vec();

        let current_page = if images.is_empty() {
            0
        } else {
            let max_page = (images.len() - 1) as i64;
            store.load(KEY_CURRENT_PAGE).unwrap_or(0).clamp(0, max_page) as usize
        };

        Self {
            images,
            current_page,
            edge_behavior,
            revision: 0,
            store,
        }
    }

    /// Clamps a page request from the outside (gallery selection, route
    /// argument) into range and applies it.
    ///
    /// With an empty image list this is a no-op and the page stays at its
    /// default 0; the slider renders its empty state instead of paging.
    pub fn set_initial_page(&mut self, requested: i64) {
        if self.images.is_empty() {
            return;
        }

        let max_page = (self.images.len() - 1) as i64;
        self.update_current_page(requested.clamp(0, max_page) as usize);
    }

    /// Stores `page` verbatim and writes it through to the store.
    ///
    /// Live page changes arrive pre-clamped because the pager never presents
    /// an out-of-range page. The revision counter is bumped on every call,
    /// including calls that store an unchanged value.
    pub fn update_current_page(&mut self, page: usize) {
        self.current_page = page;
        self.store.save(KEY_CURRENT_PAGE, page as i64);
        self.revision += 1;
    }

    /// Advances one page, honoring the edge policy.
    ///
    /// Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        match self.edge_behavior {
            EdgeBehavior::Block => {
                if self.current_page + 1 < self.images.len() {
                    self.update_current_page(self.current_page + 1);
                    true
                } else {
                    false
                }
            }
            EdgeBehavior::WrapAround => {
                if self.images.is_empty() {
                    false
                } else {
                    self.update_current_page((self.current_page + 1) % self.images.len());
                    true
                }
            }
        }
    }

    /// Goes back one page, honoring the edge policy.
    ///
    /// Returns whether the page changed.
    pub fn previous_page(&mut self) -> bool {
        match self.edge_behavior {
            EdgeBehavior::Block => {
                if self.current_page > 0 {
                    self.update_current_page(self.current_page - 1);
                    true
                } else {
                    false
                }
            }
            EdgeBehavior::WrapAround => {
                if self.images.is_empty() {
                    false
                } else if self.current_page == 0 {
                    self.update_current_page(self.images.len() - 1);
                    true
                } else {
                    self.update_current_page(self.current_page - 1);
                    true
                }
            }
        }
    }

    /// Whether a next-page request would change the page.
    pub fn can_go_next(&self) -> bool {
        match self.edge_behavior {
            EdgeBehavior::Block => self.current_page + 1 < self.images.len(),
            EdgeBehavior::WrapAround => self.images.len() > 1,
        }
    }

    /// Whether a previous-page request would change the page.
    pub fn can_go_previous(&self) -> bool {
        match self.edge_behavior {
            EdgeBehavior::Block => self.current_page > 0,
            EdgeBehavior::WrapAround => self.images.len() > 1,
        }
    }

    /// Bounds-checked lookup; `None` signals an invalid index and is
    /// rendered as an error placeholder, never a crash.
    pub fn image_at(&self, index: usize) -> Option<&ImageRecord> {
        self.images.get(index)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge_behavior
    }

    /// Monotonic change counter; observers compare it to detect writes.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::position_store::{FilePositionStore, MemoryPositionStore};
    use tempfile::tempdir;

    fn controller_with(edge_behavior: EdgeBehavior) -> SliderController {
        let catalog = ImageCatalog::builtin();
        SliderController::new(&catalog, Box::new(MemoryPositionStore::new()), edge_behavior)
    }

    fn empty_controller() -> SliderController {
        let temp_dir = tempdir().expect("create temp dir");
        let catalog = ImageCatalog::from_directory(temp_dir.path()).expect("scan failed");
        SliderController::new(
            &catalog,
            Box::new(MemoryPositionStore::new()),
            EdgeBehavior::Block,
        )
    }

    #[test]
    fn set_initial_page_clamps_above_range() {
        let mut slider = controller_with(EdgeBehavior::Block);
        slider.set_initial_page(99);
        assert_eq!(slider.current_page(), 14);
    }

    #[test]
    fn set_initial_page_clamps_below_range() {
        let mut slider = controller_with(EdgeBehavior::Block);
        slider.set_initial_page(-5);
        assert_eq!(slider.current_page(), 0);
    }

    #[test]
    fn set_initial_page_keeps_valid_request() {
        let mut slider = controller_with(EdgeBehavior::Block);
        slider.set_initial_page(4);
        assert_eq!(slider.current_page(), 4);
    }

    #[test]
    fn set_initial_page_on_empty_list_is_a_noop() {
        let mut slider = empty_controller();
        slider.set_initial_page(7);
        assert_eq!(slider.current_page(), 0);
        assert_eq!(slider.revision(), 0);
    }

    #[test]
    fn update_current_page_round_trips_through_store() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = temp_dir.path().to_path_buf();
        let catalog = ImageCatalog::builtin();

        let (store, _) = FilePositionStore::open_from("slider", Some(base.clone()));
        let mut slider =
            SliderController::new(&catalog, Box::new(store), EdgeBehavior::Block);
        slider.update_current_page(11);

        let (reopened, _) = FilePositionStore::open_from("slider", Some(base));
        let restored = SliderController::new(&catalog, Box::new(reopened), EdgeBehavior::Block);
        assert_eq!(restored.current_page(), 11);
    }

    #[test]
    fn restored_page_is_clamped_to_catalog_length() {
        let catalog = ImageCatalog::builtin();
        let mut store = MemoryPositionStore::new();
        store.save(KEY_CURRENT_PAGE, 99);

        let slider = SliderController::new(&catalog, Box::new(store), EdgeBehavior::Block);
        assert_eq!(slider.current_page(), 14);
    }

    #[test]
    fn image_at_returns_record_with_matching_id() {
        let slider = controller_with(EdgeBehavior::Block);
        let record = slider.image_at(4).expect("index 4 should exist");
        assert_eq!(record.id, 5);
    }

    #[test]
    fn image_at_out_of_range_is_none() {
        let slider = controller_with(EdgeBehavior::Block);
        assert!(slider.image_at(15).is_none());
        assert!(slider.image_at(usize::MAX).is_none());
    }

    #[test]
    fn block_policy_stops_at_last_page() {
        let mut slider = controller_with(EdgeBehavior::Block);
        slider.set_initial_page(14);

        assert!(!slider.can_go_next());
        assert!(!slider.next_page());
        assert_eq!(slider.current_page(), 14);
    }

    #[test]
    fn block_policy_stops_at_first_page() {
        let mut slider = controller_with(EdgeBehavior::Block);

        assert!(!slider.can_go_previous());
        assert!(!slider.previous_page());
        assert_eq!(slider.current_page(), 0);
    }

    #[test]
    fn wrap_around_cycles_past_the_last_page() {
        let mut slider = controller_with(EdgeBehavior::WrapAround);
        slider.set_initial_page(14);

        assert!(slider.next_page());
        assert_eq!(slider.current_page(), 0);
    }

    #[test]
    fn wrap_around_cycles_before_the_first_page() {
        let mut slider = controller_with(EdgeBehavior::WrapAround);

        assert!(slider.previous_page());
        assert_eq!(slider.current_page(), 14);
    }

    #[test]
    fn empty_list_never_pages() {
        let mut slider = empty_controller();
        assert!(!slider.next_page());
        assert!(!slider.previous_page());
        assert_eq!(slider.image_count(), 0);
    }

    #[test]
    fn revision_bumps_on_every_update_even_when_unchanged() {
        let mut slider = controller_with(EdgeBehavior::Block);
        slider.update_current_page(3);
        slider.update_current_page(3);
        assert_eq!(slider.revision(), 2);
    }

    #[test]
    fn edge_behavior_reports_configured_policy() {
        assert_eq!(
            controller_with(EdgeBehavior::Block).edge_behavior(),
            EdgeBehavior::Block
        );
        assert_eq!(
            controller_with(EdgeBehavior::WrapAround).edge_behavior(),
            EdgeBehavior::WrapAround
        );
    }
}
