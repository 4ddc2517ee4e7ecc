// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and type sizes shared by every view of the desktop host.

## Organization

- **Palette**: Brand and neutral colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use vitrina::ui::design_tokens::{palette, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BRAND_DEEP
};
assert!(backdrop.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;
    pub const SURFACE: Color = Color::from_rgb(0.98, 0.98, 0.96);
    pub const SURFACE_2: Color = Color::from_rgb(0.93, 0.96, 0.91);
    pub const TEXT: Color = Color::from_rgb(0.11, 0.14, 0.12);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.42, 0.46, 0.43);
    pub const BORDER: Color = Color::from_rgb(0.87, 0.89, 0.87);

    pub const BRAND_GREEN: Color = Color::from_rgb(0.13, 0.42, 0.27);
    pub const BRAND_GREEN_2: Color = Color::from_rgb(0.2, 0.55, 0.35);
    pub const BRAND_LIME: Color = Color::from_rgb(0.74, 0.87, 0.29);
    pub const BRAND_DEEP: Color = Color::from_rgb(0.05, 0.16, 0.1);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Modal backdrop at rest.
    pub const BACKDROP: f32 = 0.75;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const CARD_WIDTH: f32 = 260.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 160.0;
    pub const MODAL_WIDTH: f32 = 720.0;
    pub const MODAL_IMAGE_HEIGHT: f32 = 420.0;
    pub const DOT: f32 = 10.0;
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;

    /// Rendered height of one line of `BODY` text.
    pub const BODY_LINE_HEIGHT: f32 = 20.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const LARGE: f32 = 32.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(typography::BODY_LINE_HEIGHT > typography::BODY);

    assert!(sizing::MODAL_WIDTH > sizing::CARD_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
