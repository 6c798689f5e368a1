// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen transitions are funneled through [`App::switch_screen`] so the
//! rules around them live in one place: entering the slider seeds its
//! initial page, and leaving the gallery flushes any debounced scroll
//! position first.

use super::{config, Message, Screen};
use crate::catalog::ImageCatalog;
use crate::gallery::GalleryController;
use crate::slider::SliderController;
use crate::ui::gallery;
use crate::ui::slider;
use iced::Task;
use std::path::Path;
use std::time::{Duration, Instant};

use super::position_store::FilePositionStore;
use super::App;

impl App {
    /// Single update entrypoint for all application messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => self.update_gallery(message),
            Message::Slider(message) => self.update_slider(message),
            Message::Tick(now) => {
                self.flush_pending_scroll_if_quiet(now);
                Task::none()
            }
            Message::OpenFolderDialogResult(Some(path)) => {
                self.replace_catalog(&path);
                Task::none()
            }
            Message::OpenFolderDialogResult(None) => Task::none(),
            Message::WindowCloseRequested(id) => {
                self.flush_pending_scroll();
                iced::window::close(id)
            }
        }
    }

    fn update_gallery(&mut self, message: gallery::Message) -> Task<Message> {
        match message {
            gallery::Message::TileClicked(index) => {
                self.switch_screen(Screen::Slider {
                    image_index: index as i64,
                })
            }
            gallery::Message::Scrolled(offset) => {
                let position = gallery::position_from_offset(offset, self.grid_columns);
                self.pending_scroll = Some((position, Instant::now()));
                Task::none()
            }
            gallery::Message::OpenFolderRequested => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::OpenFolderDialogResult,
            ),
        }
    }

    fn update_slider(&mut self, message: slider::Message) -> Task<Message> {
        match message {
            slider::Message::NextRequested => {
                if self.slider.next_page() {
                    self.hint_dismissed = true;
                }
                Task::none()
            }
            slider::Message::PreviousRequested => {
                if self.slider.previous_page() {
                    self.hint_dismissed = true;
                }
                Task::none()
            }
            slider::Message::BackRequested => self.switch_screen(Screen::Gallery),
        }
    }

    /// Applies a screen transition.
    ///
    /// Entering the slider clamps and applies the requested index and resets
    /// the first-visit hint. Returning to the gallery leaves its persisted
    /// position untouched and scrolls the grid back to it.
    fn switch_screen(&mut self, screen: Screen) -> Task<Message> {
        match screen {
            Screen::Slider { image_index } => {
                self.flush_pending_scroll();
                self.slider.set_initial_page(image_index);
                self.hint_dismissed = false;
                self.screen = screen;
                Task::none()
            }
            Screen::Gallery => {
                self.screen = Screen::Gallery;
                self.restore_gallery_scroll()
            }
        }
    }

    /// Replaces the catalog with a directory scan and rebuilds both
    /// controllers against it, reusing each screen's persisted store so
    /// restored positions are re-clamped against the new list.
    fn replace_catalog(&mut self, directory: &Path) {
        match ImageCatalog::from_directory(directory) {
            Ok(catalog) => {
                let (gallery_store, _) = FilePositionStore::open(super::GALLERY_STORE_SCOPE);
                let (slider_store, _) = FilePositionStore::open(super::SLIDER_STORE_SCOPE);

                self.gallery = GalleryController::new(&catalog, Box::new(gallery_store));
                self.slider =
                    SliderController::new(&catalog, Box::new(slider_store), self.edge_behavior);
                self.catalog = catalog;
                self.pending_scroll = None;
                self.status = None;
            }
            Err(_) => {
                self.status = Some("notification-folder-open-error".to_string());
            }
        }
    }

    /// Writes a debounced scroll position through once the grid has been
    /// quiet for the configured window.
    fn flush_pending_scroll_if_quiet(&mut self, now: Instant) {
        let debounce = Duration::from_millis(config::SCROLL_PERSIST_DEBOUNCE_MS);

        if let Some((_, scrolled_at)) = self.pending_scroll {
            if now.duration_since(scrolled_at) >= debounce {
                self.flush_pending_scroll();
            }
        }
    }

    /// Writes any debounced scroll position through immediately.
    fn flush_pending_scroll(&mut self) {
        if let Some((position, _)) = self.pending_scroll.take() {
            self.gallery
                .update_scroll_position(position.first_visible_index, position.first_visible_offset);
        }
    }

    /// Whether a scroll position is waiting for its debounce window.
    pub(super) fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }
}
