// SPDX-License-Identifier: MPL-2.0
//! Empty state view for a slider opened over an empty catalog.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty slider state.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icons::photo_stack(), sizing::ICON_XL))
        .push(
            Text::new(i18n.tr("slider-empty-title"))
                .size(typography::TITLE_MD)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(i18n.tr("slider-empty-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
