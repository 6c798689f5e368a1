// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and slider
//! screens.
//!
//! The `App` struct wires together the catalog, the two position-holding
//! controllers and the localization layer, and translates messages into side
//! effects like position persistence or scroll restoration. Policy decisions
//! (debounce window, scroll restoration on re-entry, what a close request
//! flushes) stay close to the main update loop so user-facing behavior is
//! easy to audit.

pub mod config;
mod message;
pub mod paths;
pub mod position_store;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::ImageCatalog;
use crate::gallery::{GalleryController, GalleryPosition};
use crate::i18n::fluent::I18n;
use crate::slider::{EdgeBehavior, SliderController};
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use fluent_bundle::FluentArgs;
use iced::widget::{operation, scrollable::AbsoluteOffset};
use iced::{window, Task, Theme};
use position_store::FilePositionStore;
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Store scope for the gallery screen's positions.
const GALLERY_STORE_SCOPE: &str = "gallery";
/// Store scope for the slider screen's positions.
const SLIDER_STORE_SCOPE: &str = "slider";

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state that bridges the two screens, localization,
/// and persisted positions.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    catalog: ImageCatalog,
    gallery: GalleryController,
    slider: SliderController,
    theme_mode: ThemeMode,
    grid_columns: usize,
    edge_behavior: EdgeBehavior,
    /// Latest grid scroll position not yet written through, with the time of
    /// the scroll event that produced it. Flushed by `Tick` after the
    /// debounce window, and unconditionally before leaving the gallery.
    pending_scroll: Option<(GalleryPosition, Instant)>,
    /// Whether the first-visit navigation hint was dismissed.
    hint_dismissed: bool,
    /// Warning key for the status strip, from config/store/catalog loads.
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("image_count", &self.catalog.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests route through `Message::WindowCloseRequested` so
        // pending position writes land in the store first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags`: configuration, catalog,
    /// and both controllers with their restored positions.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let (catalog, catalog_warning) = match &flags.directory {
            Some(directory) => match ImageCatalog::from_directory(Path::new(directory)) {
                Ok(catalog) => (catalog, None),
                Err(_) => (
                    ImageCatalog::empty(),
                    Some("notification-folder-open-error".to_string()),
                ),
            },
            None => (ImageCatalog::builtin(), None),
        };

        let (gallery_store, gallery_warning) = FilePositionStore::open(GALLERY_STORE_SCOPE);
        let (slider_store, slider_warning) = FilePositionStore::open(SLIDER_STORE_SCOPE);

        let edge_behavior = config.edge_behavior();
        let gallery = GalleryController::new(&catalog, Box::new(gallery_store));
        let mut slider = SliderController::new(&catalog, Box::new(slider_store), edge_behavior);

        let screen = flags
            .route
            .as_deref()
            .map(Screen::parse_route)
            .unwrap_or_default();

        if let Screen::Slider { image_index } = screen {
            slider.set_initial_page(image_index);
        }

        let status = config_warning
            .or(catalog_warning)
            .or(gallery_warning)
            .or(slider_warning);

        let app = App {
            i18n,
            screen,
            catalog,
            gallery,
            slider,
            theme_mode: config.general.theme_mode,
            grid_columns: config.grid_columns() as usize,
            edge_behavior,
            pending_scroll: None,
            hint_dismissed: false,
            status,
        };

        let task = match app.screen {
            Screen::Gallery => app.restore_gallery_scroll(),
            Screen::Slider { .. } => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.screen {
            Screen::Slider { .. } if self.slider.image_count() > 0 => {
                let mut args = FluentArgs::new();
                args.set("current", self.slider.current_page() as i64 + 1);
                args.set("total", self.slider.image_count() as i64);

                let indicator = self.i18n.tr_args("slider-index-indicator", &args);
                format!("{indicator} - {app_name}")
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn screen(&self) -> Screen {
        self.screen
    }

    /// Scrolls the grid back to the controller's persisted position.
    fn restore_gallery_scroll(&self) -> Task<Message> {
        let offset = gallery::offset_from_position(self.gallery.position(), self.grid_columns);
        operation::scroll_to(gallery::scroll_id(), AbsoluteOffset { x: 0.0, y: offset })
    }
}
