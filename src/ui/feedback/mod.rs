// SPDX-License-Identifier: MPL-2.0
//! Iced binding of the feedback widget.
//!
//! Follows the "state down, messages up" pattern: the rating radios and the
//! comment form emit [`Message`]s, [`State::update`] forwards them to the
//! headless [`FeedbackWidget`] and turns the resulting submissions into
//! `Task`s whose completion comes back as [`Message::SubmissionFinished`].

mod wording;

pub use wording::Wording;

use crate::feedback::{Completion, FeedbackWidget, Rating, Regions, Submission};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{button, container, radio, text, text_input, Column, Row};
use iced::{Element, Length, Task};

/// Messages emitted by the feedback widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// One of the rating radios was chosen.
    RatingSelected(Rating),
    /// The comment text changed.
    CommentChanged(String),
    /// The comment form was submitted (button or Enter).
    SubmitPressed,
    /// A transport call finished.
    SubmissionFinished(Completion),
}

/// View state of one mounted widget.
#[derive(Debug)]
pub struct State {
    widget: FeedbackWidget,
    wording: Wording,
    selected: Option<Rating>,
}

impl State {
    pub fn new(widget: FeedbackWidget, wording: Wording) -> Self {
        Self {
            widget,
            wording,
            selected: None,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &FeedbackWidget {
        &self.widget
    }

    /// Mutable access for registering outcome handlers.
    pub fn widget_mut(&mut self) -> &mut FeedbackWidget {
        &mut self.widget
    }

    #[must_use]
    pub fn wording(&self) -> &Wording {
        &self.wording
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RatingSelected(rating) => match self.widget.select_rating(rating) {
                Some(submission) => {
                    self.selected = Some(rating);
                    perform(submission)
                }
                None => Task::none(),
            },
            Message::CommentChanged(text) => {
                self.widget.set_comment(text);
                Task::none()
            }
            Message::SubmitPressed => self
                .widget
                .submit_comment()
                .map_or_else(Task::none, perform),
            Message::SubmissionFinished(completion) => {
                self.widget.complete(completion);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let regions = self.widget.regions();
        let mut content = Column::new().spacing(spacing::MD);

        if regions.form {
            content = content.push(self.view_form(regions));
        }
        if regions.success {
            content = content.push(outcome(&self.wording.thanks, palette::SUCCESS_500));
        }
        if regions.error {
            content = content.push(outcome(&self.wording.error, palette::ERROR_500));
        }

        container(content)
            .padding(spacing::LG)
            .max_width(sizing::PANEL_WIDTH)
            .style(container_styles::panel)
            .into()
    }

    fn view_form(&self, regions: Regions) -> Element<'_, Message> {
        let busy = self.widget.is_busy();
        let mut form = Column::new().spacing(spacing::SM);

        if regions.rating {
            form = form.push(text(self.wording.satisfied.as_str()).size(typography::BODY_LG));
            let choices = self
                .wording
                .rating_order()
                .into_iter()
                .fold(Row::new().spacing(spacing::MD), |row, rating| {
                    row.push(
                        radio(
                            self.wording.rating_label(rating),
                            rating,
                            self.selected,
                            Message::RatingSelected,
                        )
                        .size(typography::BODY_LG)
                        .text_size(typography::BODY),
                    )
                });
            form = form.push(choices);
        }

        if regions.comment {
            if !self.wording.comment.is_empty() {
                form = form.push(text(self.wording.comment.as_str()).size(typography::BODY));
            }
            let mut input = text_input(&self.wording.comment_placeholder, self.widget.comment())
                .size(typography::BODY)
                .padding(spacing::XS)
                .width(Length::Fill);
            if !busy {
                input = input
                    .on_input(Message::CommentChanged)
                    .on_submit(Message::SubmitPressed);
            }
            form = form.push(container(input).height(sizing::INPUT_HEIGHT));
        }

        if regions.submit {
            let label = if busy {
                &self.wording.sending
            } else {
                &self.wording.submit
            };
            form = form.push(
                button(text(label.as_str()).size(typography::BODY))
                    .on_press_maybe((!busy).then_some(Message::SubmitPressed)),
            );
        }

        form.into()
    }
}

fn perform(submission: Submission) -> Task<Message> {
    Task::perform(submission.send(), Message::SubmissionFinished)
}

fn outcome(message: &str, accent: iced::Color) -> Element<'_, Message> {
    container(text(message).size(typography::BODY_LG))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(container_styles::outcome(accent))
        .into()
}
