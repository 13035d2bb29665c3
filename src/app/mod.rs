// SPDX-License-Identifier: MPL-2.0
//! Host application mounting a single feedback widget in a window.
//!
//! The `App` struct wires configuration, localization and the transport
//! together, then forwards every message to the widget component.

mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::feedback::{
    FeedbackWidget, HttpTransport, SecurityToken, Transport, UnavailableTransport,
};
use crate::i18n::fluent::I18n;
use crate::ui::feedback::{self, Wording};
use iced::widget::container;
use iced::{window, Element, Length, Task};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 360.0;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    feedback: feedback::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("stage", &self.feedback.widget().stage())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads configuration, applies CLI flags and mounts the widget.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (mut config, warning) = config::load();
        if warning.is_some() {
            log::warn!("Using default settings");
        }
        flags.apply_to(&mut config);

        let i18n = I18n::new(flags.lang.clone(), &config);
        let feedback = mount_widget(&config, &i18n);

        (Self { i18n, feedback }, Task::none())
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feedback(message) => self.feedback.update(message).map(Message::Feedback),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        container(self.feedback.view().map(Message::Feedback))
            .center(Length::Fill)
            .into()
    }
}

/// Creates the widget for `config`, falling back to a transport that fails
/// every submission when the endpoint cannot be used.
pub fn mount_widget(config: &Config, i18n: &I18n) -> feedback::State {
    let transport: Arc<dyn Transport> = match HttpTransport::new(&config.endpoint) {
        Ok(transport) => {
            log::info!("Posting feedback to {}", transport.url());
            Arc::new(transport)
        }
        Err(err) => {
            log::error!("{err}");
            Arc::new(UnavailableTransport::new(err.to_string()))
        }
    };

    let token = match &config.endpoint.security_token {
        Some(token) => SecurityToken::new(token.clone()),
        None => {
            log::warn!("No security token configured; the endpoint may reject submissions");
            SecurityToken::default()
        }
    };

    let widget = FeedbackWidget::new(transport, token).with_timeout(config.endpoint.timeout());
    feedback::State::new(widget, Wording::resolve(i18n, &config.wording))
}
