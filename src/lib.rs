// SPDX-License-Identifier: MPL-2.0
//! `thumber` is a small "was this useful?" feedback widget built with Iced.
//!
//! A visitor rates a service with a binary choice. A positive rating closes
//! the flow; a negative one asks for an optional comment that is sent as a
//! follow-up tied to the identifier the endpoint returned. The state machine
//! in [`feedback`] is independent of the GUI and can be driven headlessly.

#![doc(html_root_url = "https://docs.rs/thumber/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod feedback;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
