// SPDX-License-Identifier: MPL-2.0
//! Cross-module flows: catalog → controllers → persisted stores, exercised
//! against real files in temporary directories.

use iced_gallery::app::config::{self, Config};
use iced_gallery::app::position_store::FilePositionStore;
use iced_gallery::app::Screen;
use iced_gallery::catalog::ImageCatalog;
use iced_gallery::gallery::{GalleryController, GalleryPosition};
use iced_gallery::slider::{EdgeBehavior, SliderController};
use tempfile::tempdir;

#[test]
fn selecting_a_gallery_tile_opens_the_slider_on_that_image() {
    let data_dir = tempdir().expect("create temp dir");
    let catalog = ImageCatalog::builtin();

    // Activating tile 4 hands the index to the slider as its initial page.
    let (store, _) = FilePositionStore::open_from("slider", Some(data_dir.path().to_path_buf()));
    let mut slider = SliderController::new(&catalog, Box::new(store), EdgeBehavior::Block);
    slider.set_initial_page(4);

    assert_eq!(slider.current_page(), 4);
    assert_eq!(slider.image_at(4).expect("page 4 exists").id, 5);
}

#[test]
fn both_screens_resume_from_their_persisted_positions() {
    let data_dir = tempdir().expect("create temp dir");
    let base = data_dir.path().to_path_buf();
    let catalog = ImageCatalog::builtin();

    // First session: scroll the gallery, page through the slider.
    {
        let (store, _) = FilePositionStore::open_from("gallery", Some(base.clone()));
        let mut gallery = GalleryController::new(&catalog, Box::new(store));
        gallery.update_scroll_position(9, 140);

        let (store, _) = FilePositionStore::open_from("slider", Some(base.clone()));
        let mut slider = SliderController::new(&catalog, Box::new(store), EdgeBehavior::Block);
        slider.set_initial_page(9);
        slider.next_page();
        slider.next_page();
    }

    // Second session: fresh controllers against the same stores.
    let (store, _) = FilePositionStore::open_from("gallery", Some(base.clone()));
    let gallery = GalleryController::new(&catalog, Box::new(store));
    assert_eq!(
        gallery.position(),
        GalleryPosition {
            first_visible_index: 9,
            first_visible_offset: 140,
        }
    );

    let (store, _) = FilePositionStore::open_from("slider", Some(base));
    let slider = SliderController::new(&catalog, Box::new(store), EdgeBehavior::Block);
    assert_eq!(slider.current_page(), 11);
}

#[test]
fn slider_session_leaves_the_gallery_position_untouched() {
    let data_dir = tempdir().expect("create temp dir");
    let base = data_dir.path().to_path_buf();
    let catalog = ImageCatalog::builtin();

    let (store, _) = FilePositionStore::open_from("gallery", Some(base.clone()));
    let mut gallery = GalleryController::new(&catalog, Box::new(store));
    gallery.update_scroll_position(6, 80);

    // A full slider round trip writes only slider keys.
    {
        let (store, _) = FilePositionStore::open_from("slider", Some(base.clone()));
        let mut slider = SliderController::new(&catalog, Box::new(store), EdgeBehavior::Block);
        slider.set_initial_page(12);
        slider.previous_page();
    }

    // Back on the gallery, the persisted position is exactly what we left.
    let (store, _) = FilePositionStore::open_from("gallery", Some(base));
    let resumed = GalleryController::new(&catalog, Box::new(store));
    assert_eq!(
        resumed.position(),
        GalleryPosition {
            first_visible_index: 6,
            first_visible_offset: 80,
        }
    );
}

#[test]
fn configured_edge_behavior_drives_the_page_change_path() {
    let config_dir = tempdir().expect("create temp dir");
    let data_dir = tempdir().expect("create temp dir");

    let mut config = Config::default();
    config.slider.edge_behavior = Some(EdgeBehavior::WrapAround);
    config::save_with_override(&config, Some(config_dir.path().to_path_buf()))
        .expect("save config");

    let (loaded, warning) = config::load_with_override(Some(config_dir.path().to_path_buf()));
    assert!(warning.is_none());

    let catalog = ImageCatalog::builtin();
    let (store, _) = FilePositionStore::open_from("slider", Some(data_dir.path().to_path_buf()));
    let mut slider = SliderController::new(&catalog, Box::new(store), loaded.edge_behavior());

    slider.set_initial_page(14);
    assert!(slider.next_page());
    assert_eq!(slider.current_page(), 0);
}

#[test]
fn malformed_route_argument_opens_the_slider_at_zero() {
    let data_dir = tempdir().expect("create temp dir");
    let catalog = ImageCatalog::builtin();

    let screen = Screen::parse_route("slider/not-a-number");
    let Screen::Slider { image_index } = screen else {
        panic!("expected slider route");
    };

    let (store, _) = FilePositionStore::open_from("slider", Some(data_dir.path().to_path_buf()));
    let mut slider = SliderController::new(&catalog, Box::new(store), EdgeBehavior::Block);
    slider.set_initial_page(image_index);

    assert_eq!(slider.current_page(), 0);
}

#[test]
fn directory_catalog_feeds_both_controllers_the_same_order() {
    let image_dir = tempdir().expect("create temp dir");
    let data_dir = tempdir().expect("create temp dir");
    for name in ["b.png", "a.jpg", "c.gif"] {
        std::fs::write(image_dir.path().join(name), b"fake image data").expect("write file");
    }

    let catalog = ImageCatalog::from_directory(image_dir.path()).expect("scan failed");

    let (store, _) = FilePositionStore::open_from("gallery", Some(data_dir.path().to_path_buf()));
    let gallery = GalleryController::new(&catalog, Box::new(store));

    let (store, _) = FilePositionStore::open_from("slider", Some(data_dir.path().to_path_buf()));
    let slider = SliderController::new(&catalog, Box::new(store), EdgeBehavior::Block);

    assert_eq!(gallery.image_count(), 3);
    assert_eq!(slider.image_count(), 3);

    for index in 0..3 {
        assert_eq!(
            gallery.images()[index].id,
            slider.image_at(index).expect("index in range").id
        );
    }
}

#[test]
fn stale_slider_position_is_clamped_when_the_catalog_shrinks() {
    let image_dir = tempdir().expect("create temp dir");
    let data_dir = tempdir().expect("create temp dir");
    let base = data_dir.path().to_path_buf();

    // Previous session persisted page 12 against the builtin catalog.
    {
        let catalog = ImageCatalog::builtin();
        let (store, _) = FilePositionStore::open_from("slider", Some(base.clone()));
        let mut slider = SliderController::new(&catalog, Box::new(store), EdgeBehavior::Block);
        slider.set_initial_page(12);
    }

    // This session runs against a two-image directory.
    for name in ["a.jpg", "b.jpg"] {
        std::fs::write(image_dir.path().join(name), b"fake image data").expect("write file");
    }
    let catalog = ImageCatalog::from_directory(image_dir.path()).expect("scan failed");

    let (store, _) = FilePositionStore::open_from("slider", Some(base));
    let slider = SliderController::new(&catalog, Box::new(store), EdgeBehavior::Block);
    assert_eq!(slider.current_page(), 1);
}
