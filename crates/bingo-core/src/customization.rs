use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

const FONT_SIZE_RANGE: RangeInclusive<f32> = 0.5..=2.0;
const BORDER_SIZE_RANGE: RangeInclusive<u8> = 0..=10;

/// Colors and typography of a printed card.
///
/// Fields missing from a stored or submitted payload fall back to the
/// [`Theme::Classic`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customization {
    pub cell_background_color: String,
    pub cell_text_color: String,
    pub cell_border_color: String,
    pub free_cell_background_color: String,
    pub free_cell_text_color: String,
    pub title_color: String,
    pub footer_color: String,
    pub card_background_color: String,
    /// Multiplier applied to the cell font size.
    pub cell_font_size: f32,
    /// Cell border width in pixels.
    pub cell_border_size: u8,
}

impl Default for Customization {
    fn default() -> Self {
        Theme::Classic.customization()
    }
}

impl Customization {
    /// Checks colors and sizes are within what a card can render.
    pub fn validate(&self) -> std::result::Result<(), CoreError> {
        let colors = [
            ("cellBackgroundColor", &self.cell_background_color),
            ("cellTextColor", &self.cell_text_color),
            ("cellBorderColor", &self.cell_border_color),
            ("freeCellBackgroundColor", &self.free_cell_background_color),
            ("freeCellTextColor", &self.free_cell_text_color),
            ("titleColor", &self.title_color),
            ("footerColor", &self.footer_color),
            ("cardBackgroundColor", &self.card_background_color),
        ];

        for (field, value) in colors {
            if !is_color(value) {
                return Err(CoreError::InvalidCustomization(format!(
                    "{field} must be a hex color or 'transparent', got '{value}'"
                )));
            }
        }

        if !FONT_SIZE_RANGE.contains(&self.cell_font_size) {
            return Err(CoreError::InvalidCustomization(format!(
                "cellFontSize must be between {} and {}, got {}",
                FONT_SIZE_RANGE.start(),
                FONT_SIZE_RANGE.end(),
                self.cell_font_size
            )));
        }

        if !BORDER_SIZE_RANGE.contains(&self.cell_border_size) {
            return Err(CoreError::InvalidCustomization(format!(
                "cellBorderSize must be between {} and {}, got {}",
                BORDER_SIZE_RANGE.start(),
                BORDER_SIZE_RANGE.end(),
                self.cell_border_size
            )));
        }

        Ok(())
    }
}

fn is_color(value: &str) -> bool {
    if value == "transparent" {
        return true;
    }

    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Built-in color presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Classic,
    Dark,
    Pastel,
    Bold,
    Ocean,
    Forest,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Classic,
        Theme::Dark,
        Theme::Pastel,
        Theme::Bold,
        Theme::Ocean,
        Theme::Forest,
    ];

    /// Returns the full customization for this preset.
    pub fn customization(self) -> Customization {
        // cell bg, cell text, border, free bg, free text, title, footer, card bg
        let colors: [&str; 8] = match self {
            Theme::Classic => [
                "#ffffff", "#111827", "#1f2937", "#fbbf24", "#ffffff", "#111827", "#6b7280",
                "transparent",
            ],
            Theme::Dark => [
                "#1f2937", "#f9fafb", "#4b5563", "#6366f1", "#ffffff", "#f9fafb", "#9ca3af",
                "#111827",
            ],
            Theme::Pastel => [
                "#fef3c7", "#78350f", "#fbbf24", "#c084fc", "#ffffff", "#7c3aed", "#a78bfa",
                "#faf5ff",
            ],
            Theme::Bold => [
                "#fee2e2", "#7f1d1d", "#dc2626", "#dc2626", "#ffffff", "#991b1b", "#b91c1c",
                "#fef2f2",
            ],
            Theme::Ocean => [
                "#e0f2fe", "#0c4a6e", "#0284c7", "#0ea5e9", "#ffffff", "#0369a1", "#38bdf8",
                "#f0f9ff",
            ],
            Theme::Forest => [
                "#dcfce7", "#14532d", "#16a34a", "#22c55e", "#ffffff", "#15803d", "#4ade80",
                "#f0fdf4",
            ],
        };

        let [cell_bg, cell_text, border, free_bg, free_text, title, footer, card_bg] = colors;

        Customization {
            cell_background_color: cell_bg.to_owned(),
            cell_text_color: cell_text.to_owned(),
            cell_border_color: border.to_owned(),
            free_cell_background_color: free_bg.to_owned(),
            free_cell_text_color: free_text.to_owned(),
            title_color: title.to_owned(),
            footer_color: footer.to_owned(),
            card_background_color: card_bg.to_owned(),
            cell_font_size: 1.0,
            cell_border_size: 3,
        }
    }
}
