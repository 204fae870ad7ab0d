//! Color lookups for the terminal user interface.
//!
//! Styling is keyed by task category and display mode only; nothing here
//! touches task data.

use ratatui::style::Color;

use crate::fields::{Category, DisplayMode};

/// Light blue-gray, used for General
pub const BLUE_GRAY: Color = Color::Rgb(176, 190, 197);
/// Light orange, used for Work
pub const LIGHT_ORANGE: Color = Color::Rgb(255, 204, 128);
/// Teal, used for Personal
pub const TEAL: Color = Color::Rgb(128, 203, 196);
/// Light red, used for Urgent
pub const LIGHT_RED: Color = Color::Rgb(255, 138, 128);

/// Brand purple for the action label and progress gauge.
pub const PURPLE: Color = Color::Rgb(107, 56, 251);
pub const LAVENDER: Color = Color::Rgb(211, 186, 255);

/// Row background for a task of the given category.
pub fn category_color(category: Category) -> Color {
    match category {
        Category::General => BLUE_GRAY,
        Category::Work => LIGHT_ORANGE,
        Category::Personal => TEAL,
        Category::Urgent => LIGHT_RED,
    }
}

/// Screen colors for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,
    pub border: Color,
    pub accent: Color,
    pub row_text: Color,
}

impl Palette {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Palette {
                background: Color::Rgb(240, 240, 240),
                foreground: Color::Black,
                surface: Color::White,
                border: Color::Rgb(204, 204, 204),
                accent: PURPLE,
                row_text: Color::Black,
            },
            DisplayMode::Dark => Palette {
                background: Color::Rgb(51, 51, 51),
                foreground: Color::White,
                surface: Color::Rgb(68, 68, 68),
                border: Color::Rgb(85, 85, 85),
                accent: LAVENDER,
                row_text: Color::Rgb(20, 20, 20),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_distinct_color() {
        let colors: Vec<Color> = Category::ALL.into_iter().map(category_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn palettes_differ_by_mode() {
        let light = Palette::for_mode(DisplayMode::Light);
        let dark = Palette::for_mode(DisplayMode::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(light.foreground, Color::Black);
        assert_eq!(dark.foreground, Color::White);
    }
}
