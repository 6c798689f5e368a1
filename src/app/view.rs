// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen from controller state. Controllers expose
//! synchronous getters only; everything visual is derived here per frame.

use super::{App, Message, Screen};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::slider::{self, ViewContext as SliderViewContext};
use iced::Element;

impl App {
    /// Renders the current application view based on the active screen.
    pub fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Gallery => gallery::view(GalleryViewContext {
                i18n: &self.i18n,
                images: self.gallery.images(),
                columns: self.grid_columns,
                status: self.status.as_deref(),
            })
            .map(Message::Gallery),
            Screen::Slider { .. } => slider::view(SliderViewContext {
                i18n: &self.i18n,
                current: self.slider.image_at(self.slider.current_page()),
                current_page: self.slider.current_page(),
                image_count: self.slider.image_count(),
                can_go_previous: self.slider.can_go_previous(),
                can_go_next: self.slider.can_go_next(),
                show_hint: !self.hint_dismissed,
            })
            .map(Message::Slider),
        }
    }
}
