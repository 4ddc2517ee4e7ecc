// SPDX-License-Identifier: MPL-2.0
//! `vitrina` is a storefront page built with the Iced GUI framework.
//!
//! The library holds the interaction controllers of the page: an accordion
//! of disclosure items where at most one is open, and a modal image
//! carousel that can prefill the quote form. Both drive their transitions
//! through the [`motion::Animator`] capability, so they run the same way
//! against the frame-ticked engine of the desktop host and against the
//! recording engine used by tests.

#![doc(html_root_url = "https://docs.rs/vitrina/0.1.0")]

pub mod app;
pub mod carousel;
pub mod catalogue;
pub mod config;
pub mod content;
pub mod disclosure;
pub mod error;
pub mod i18n;
pub mod motion;
pub mod page;
pub mod quote_form;
pub mod ui;
