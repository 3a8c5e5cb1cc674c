// SPDX-License-Identifier: MPL-2.0
//! Toast card and overlay rendering.
//!
//! Each active toast is drawn as a small accent-bordered card with its
//! message, a dismiss button and, when enabled, a decay indicator showing
//! how much lifetime remains. The overlay stacks all cards and anchors
//! them at the provider's edge.

use crate::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::provider::{Edge, Message, Provider};
use crate::toast::Toast;
use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast card.
pub fn view<'a>(provider: &'a Provider, toast: &'a Toast) -> Element<'a, Message> {
    let accent_color = toast.variant().accent_color();

    let message_widget = Text::new(toast.text())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let toast_id = toast.id();
    let dismiss_button = button(text("\u{2715}").size(sizing::ICON_SM))
        .on_press(Message::Dismiss(toast_id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [message] [dismiss], decay indicator underneath
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    let mut content = Column::new().spacing(spacing::XXS).push(header);

    if provider.progress_visible(toast) {
        let remaining = toast.remaining_fraction(provider.lifetime_of(toast));
        content = content.push(progress_bar(0.0..=1.0, remaining));
    }

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent_color))
        .into()
}

/// Renders the overlay with all active toasts, stacked in insertion
/// order and anchored at the provider's edge.
pub fn overlay(provider: &Provider) -> Element<'_, Message> {
    let cards: Vec<Element<'_, Message>> = provider
        .iter()
        .map(|toast| view(provider, toast))
        .collect();

    if cards.is_empty() {
        // Empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let stack = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(match provider.edge() {
            Edge::Top => alignment::Vertical::Top,
            Edge::Bottom => alignment::Vertical::Bottom,
        })
        .padding(spacing::MD)
        .into()
}

/// Style function for the toast card container.
fn card_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
