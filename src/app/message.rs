// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel::Key;
use crate::ui::{carousel, catalogue, faq, quote};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// section messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Faq(faq::Message),
    Catalogue(catalogue::Message),
    Carousel(carousel::Message),
    Quote(quote::Message),
    /// Window-wide key press, routed while the carousel is open.
    KeyPressed(Key),
    /// Frame tick driving the motion engine.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional site content file replacing the embedded content.
    pub content_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VITRINA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
