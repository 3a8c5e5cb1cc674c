// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery for the toast provider.
//!
//! Shows one button per variant plus a long-lived toast without a decay
//! indicator. Run with:
//!
//! ```sh
//! cargo run --example gallery -- --edge bottom
//! ```

use iced::widget::{button, column, container, row, stack, text};
use iced::{alignment, Element, Length, Subscription};
use iced_toaster::{provider, Edge, Provider, Toast};
use std::time::Duration;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    let edge = match args
        .opt_value_from_str::<_, String>("--edge")
        .unwrap_or(None)
        .as_deref()
    {
        Some("bottom") => Edge::Bottom,
        _ => Edge::Top,
    };

    iced::application(
        move || Gallery::new(edge),
        Gallery::update,
        Gallery::view,
    )
    .title("iced_toaster gallery")
    .subscription(Gallery::subscription)
    .run()
}

struct Gallery {
    toasts: Provider,
}

#[derive(Debug, Clone)]
enum Message {
    ShowDefault,
    ShowSuccess,
    ShowDestructive,
    ShowInfo,
    ShowSticky,
    Toast(provider::Message),
}

impl Gallery {
    fn new(edge: Edge) -> Self {
        Self {
            toasts: Provider::with_edge(edge),
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ShowDefault => {
                self.toasts.show(Toast::new("Something happened"));
            }
            Message::ShowSuccess => {
                self.toasts.show(Toast::success("Saved"));
            }
            Message::ShowDestructive => {
                self.toasts
                    .show(Toast::destructive("Failed").duration(Duration::from_secs(5)));
            }
            Message::ShowInfo => {
                self.toasts.show(Toast::info("Update available"));
            }
            Message::ShowSticky => {
                self.toasts.show(
                    Toast::new("Sticks around for a while")
                        .duration(Duration::from_secs(30))
                        .show_progress(false),
                );
            }
            Message::Toast(message) => self.toasts.handle_message(&message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = row![
            button(text("Default")).on_press(Message::ShowDefault),
            button(text("Success")).on_press(Message::ShowSuccess),
            button(text("Destructive")).on_press(Message::ShowDestructive),
            button(text("Info")).on_press(Message::ShowInfo),
            button(text("Sticky")).on_press(Message::ShowSticky),
        ]
        .spacing(8);

        let content = container(column![text("iced_toaster gallery").size(24), controls].spacing(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        stack![content, self.toasts.view().map(Message::Toast)].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toast)
    }
}
