// SPDX-License-Identifier: MPL-2.0
//! Slider screen: one image fullscreen, with page navigation.
//!
//! Keyboard arrows and the on-screen chevrons both route through the same
//! messages; whether a chevron is enabled mirrors the controller's edge
//! policy, so a blocked edge shows up as a disabled button rather than a
//! press that goes nowhere.

pub mod empty_state;

use crate::catalog::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::svg::Svg;
use iced::widget::{button, Column, Container, Image, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the slider screen.
#[derive(Debug, Clone)]
pub enum Message {
    PreviousRequested,
    NextRequested,
    BackRequested,
}

/// Contextual data needed to render the slider.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Record at the current page; `None` with a non-empty catalog means the
    /// page is out of range and the error placeholder is shown.
    pub current: Option<&'a ImageRecord>,
    pub current_page: usize,
    pub image_count: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// First-visit hint under the image, dismissed after the first page turn.
    pub show_hint: bool,
}

/// Renders the slider screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut root = Column::new().push(top_bar(&ctx));

    let body: Element<'_, Message> = if ctx.image_count == 0 {
        empty_state::view(ctx.i18n)
    } else {
        pager(&ctx)
    };

    root = root.push(body);

    root.width(Length::Fill).height(Length::Fill).into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let back_content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::arrow_back(), sizing::ICON_MD))
        .push(Text::new(ctx.i18n.tr("slider-back-button")).size(typography::BODY));

    let back_button = button(back_content)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::tile)
        .on_press(Message::BackRequested);

    let mut bar = Row::new()
        .align_y(alignment::Vertical::Center)
        .padding([spacing::XS, spacing::MD])
        .push(back_button)
        .push(Space::new().width(Length::Fill));

    if ctx.image_count > 0 {
        let mut args = FluentArgs::new();
        args.set("current", ctx.current_page as i64 + 1);
        args.set("total", ctx.image_count as i64);

        bar = bar.push(
            Text::new(ctx.i18n.tr_args("slider-index-indicator", &args))
                .size(typography::TITLE_MD),
        );
    }

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
        .style(styles::container::top_bar)
        .into()
}

fn pager<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let center: Element<'a, Message> = match ctx.current {
        Some(record) => current_image(ctx, record),
        None => error_placeholder(ctx.i18n),
    };

    let content = Row::new()
        .align_y(alignment::Vertical::Center)
        .padding(spacing::SM)
        .spacing(spacing::SM)
        .push(nav_button(
            icons::chevron_left(),
            ctx.can_go_previous,
            Message::PreviousRequested,
        ))
        .push(center)
        .push(nav_button(
            icons::chevron_right(),
            ctx.can_go_next,
            Message::NextRequested,
        ));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::slider_backdrop)
        .into()
}

fn current_image<'a>(ctx: &ViewContext<'a>, record: &'a ImageRecord) -> Element<'a, Message> {
    let image = Image::new(record.handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut column = Column::new()
        .align_x(alignment::Horizontal::Center)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(image)
        .push(
            Text::new(record.alt_text.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        );

    if ctx.show_hint {
        column = column.push(
            Text::new(ctx.i18n.tr("slider-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    column.into()
}

fn error_placeholder(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .align_x(alignment::Horizontal::Center)
        .spacing(spacing::SM)
        .push(icons::sized(icons::broken_image(), sizing::ICON_XL))
        .push(
            Text::new(i18n.tr("slider-error-title"))
                .size(typography::TITLE_MD)
                .color(palette::GRAY_200),
        )
        .push(
            Text::new(i18n.tr("slider-error-body"))
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

fn nav_button(icon: Svg<'static>, enabled: bool, message: Message) -> Element<'static, Message> {
    button(icons::sized(icon, sizing::ICON_MD))
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press_maybe(enabled.then_some(message))
        .into()
}
