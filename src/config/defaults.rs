// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Motion**: Durations of the disclosure, modal and image transitions
//! - **Carousel**: Modal entrance geometry
//! - **Disclosure**: Indicator angles

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Duration of a disclosure body opening or closing (milliseconds).
pub const DEFAULT_DISCLOSURE_MS: u64 = 300;

/// Duration of the modal entrance and exit transitions (milliseconds).
pub const DEFAULT_MODAL_MS: u64 = 300;

/// Fade-out delay before the carousel swaps the displayed image, and the
/// duration of the fade-in that follows (milliseconds).
pub const DEFAULT_IMAGE_FADE_MS: u64 = 200;

/// Delay before the sample-request flow prefills the quote form, leaving time
/// for the page scroll started by the triggering button (milliseconds).
pub const DEFAULT_SAMPLE_REQUEST_DELAY_MS: u64 = 600;

/// Upper bound accepted for any configured duration (milliseconds).
pub const MAX_MOTION_MS: u64 = 5_000;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Scale the modal surface enters from and exits to.
pub const MODAL_HIDDEN_SCALE: f32 = 0.95;

// ==========================================================================
// Disclosure Defaults
// ==========================================================================

/// Indicator rotation of an expanded item (degrees).
pub const INDICATOR_EXPANDED_DEGREES: f32 = 180.0;

/// Indicator rotation of a collapsed item (degrees).
pub const INDICATOR_COLLAPSED_DEGREES: f32 = 0.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DISCLOSURE_MS <= MAX_MOTION_MS);
    assert!(DEFAULT_MODAL_MS <= MAX_MOTION_MS);
    assert!(DEFAULT_IMAGE_FADE_MS <= MAX_MOTION_MS);
    assert!(DEFAULT_SAMPLE_REQUEST_DELAY_MS <= MAX_MOTION_MS);

    assert!(MODAL_HIDDEN_SCALE > 0.0);
    assert!(MODAL_HIDDEN_SCALE < 1.0);

    assert!(INDICATOR_EXPANDED_DEGREES > INDICATOR_COLLAPSED_DEGREES);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_defaults_are_valid() {
        assert_eq!(DEFAULT_DISCLOSURE_MS, 300);
        assert!(DEFAULT_IMAGE_FADE_MS < DEFAULT_MODAL_MS + MAX_MOTION_MS);
        assert!(DEFAULT_SAMPLE_REQUEST_DELAY_MS > 0);
    }

    #[test]
    fn indicator_defaults_are_half_turn() {
        assert_eq!(
            INDICATOR_EXPANDED_DEGREES - INDICATOR_COLLAPSED_DEGREES,
            180.0
        );
    }
}
