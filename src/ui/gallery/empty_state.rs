// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when the catalog holds no images.
//!
//! Shown instead of the grid, never alongside it. Offers a folder picker so
//! an empty start is a starting point rather than a dead end.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the empty gallery state.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let icon = icons::sized(icons::photo_stack(), sizing::ICON_XL * 2.0);

    let title = Text::new(i18n.tr("gallery-empty-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("gallery-empty-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let button_content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::folder_open(), sizing::ICON_SM))
        .push(Text::new(i18n.tr("gallery-empty-open-button")));

    let open_button = button(button_content)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenFolderRequested);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
