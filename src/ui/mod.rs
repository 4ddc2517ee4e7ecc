// SPDX-License-Identifier: MPL-2.0
//! User interface of the desktop host.
//!
//! Each page section is a view module following the "state down, messages
//! up" pattern: it renders from borrowed state and emits its own `Message`,
//! which the application maps into its top-level message.
//!
//! # Sections
//!
//! - [`faq`] - Collapsible question and answer cards
//! - [`catalogue`] - Category chips and product cards
//! - [`quote`] - Quote request form
//! - [`carousel`] - Modal image carousel drawn over the page
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Button and container styles
//! - [`widgets`] - Custom widgets (scroll lock)

pub mod carousel;
pub mod catalogue;
pub mod design_tokens;
pub mod faq;
pub mod quote;
pub mod styles;
pub mod widgets;
