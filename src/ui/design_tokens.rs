// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the widget's views.
//!
//! - **Palette**: Semantic colors for outcome regions
//! - **Opacity**: Surface transparency
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Maximum width of the feedback panel.
    pub const PANEL_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large body - Form questions, outcome messages
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Labels, buttons
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const LG: f32 = 12.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert!(spacing::SM > spacing::XS && spacing::SM < spacing::MD);
        assert!(spacing::LG > spacing::MD);
    }

    #[test]
    fn outcome_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
    }
}
