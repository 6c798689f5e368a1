// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: a scrollable grid of image tiles.
//!
//! The grid reports its scroll offset in pixels; the conversion between that
//! offset and the controller's `(first visible index, offset)` pair lives
//! here as pure row arithmetic, because tile size and row spacing are
//! presentation constants the controller should not know about.

pub mod empty_state;

use crate::catalog::ImageRecord;
use crate::gallery::GalleryPosition;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, Column, Container, Id, Image, Row, Scrollable, Text};
use iced::{ContentFit, Element, Length};

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// A tile was activated; carries the image index.
    TileClicked(usize),
    /// The grid scrolled to the given absolute pixel offset.
    Scrolled(f32),
    /// The empty state's open-folder button was pressed.
    OpenFolderRequested,
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a [ImageRecord],
    pub columns: usize,
    /// Warning key for the status strip, if a load produced one.
    pub status: Option<&'a str>,
}

/// Widget id of the grid scrollable, used to restore the scroll offset.
pub fn scroll_id() -> Id {
    Id::new("gallery-grid")
}

/// Vertical distance between the tops of two consecutive rows.
pub fn row_stride() -> f32 {
    sizing::GALLERY_TILE + spacing::XS
}

/// Converts an absolute scroll offset into the controller's position pair.
pub fn position_from_offset(y: f32, columns: usize) -> GalleryPosition {
    let stride = row_stride();
    let row = (y.max(0.0) / stride).floor() as usize;

    GalleryPosition {
        first_visible_index: row * columns.max(1),
        first_visible_offset: (y.max(0.0) - row as f32 * stride).round() as u32,
    }
}

/// Converts the controller's position pair back into a scroll offset.
pub fn offset_from_position(position: GalleryPosition, columns: usize) -> f32 {
    let row = position.first_visible_index / columns.max(1);
    row as f32 * row_stride() + position.first_visible_offset as f32
}

/// Renders the gallery screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut root = Column::new().push(top_bar(ctx.i18n, ctx.images.len()));

    if let Some(key) = ctx.status {
        root = root.push(status_line(ctx.i18n, key));
    }

    let body: Element<'_, Message> = if ctx.images.is_empty() {
        empty_state::view(ctx.i18n)
    } else {
        grid(ctx.images, ctx.columns)
    };

    root.push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn top_bar(i18n: &I18n, image_count: usize) -> Element<'_, Message> {
    let mut heading = Column::new().push(
        Text::new(i18n.tr("gallery-title")).size(typography::TITLE_MD),
    );

    if image_count > 0 {
        let mut args = FluentArgs::new();
        args.set("count", image_count as i64);

        heading = heading.push(
            Text::new(i18n.tr_args("gallery-items-count", &args))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    Container::new(heading)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
        .style(styles::container::top_bar)
        .into()
}

fn status_line<'a>(i18n: &'a I18n, key: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr(key)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::status_line)
        .into()
}

fn grid(images: &[ImageRecord], columns: usize) -> Element<'_, Message> {
    let columns = columns.max(1);
    let mut content = Column::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::MD]);

    for (row_index, chunk) in images.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::XS);

        for (column_index, record) in chunk.iter().enumerate() {
            let index = row_index * columns + column_index;
            row = row.push(tile(record, index));
        }

        content = content.push(row);
    }

    Scrollable::new(content)
        .id(scroll_id())
        .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tile(record: &ImageRecord, index: usize) -> Element<'_, Message> {
    let thumbnail = Image::new(record.handle.clone())
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(sizing::GALLERY_TILE))
        .height(Length::Fixed(sizing::GALLERY_TILE));

    button(thumbnail)
        .padding(0)
        .style(styles::button::tile)
        .on_press(Message::TileClicked(index))
        .into()
}
