//! Color mapping for the console table.

use crate::state::Market;
use crossterm::style::{Color, Stylize};
use rust_decimal::Decimal;
use std::fmt::Display;

/// Green for flat or rising, red for falling.
pub fn change_color(change: Decimal) -> Color {
    if change >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    }
}

/// Symbol highlight per listing market.
pub fn market_color(market: Market) -> Color {
    match market {
        Market::Nyse => Color::Yellow,
        Market::Other => Color::White,
    }
}

pub const HEADER: Color = Color::Cyan;
pub const NAME: Color = Color::Cyan;
pub const NOTICE: Color = Color::Yellow;
pub const SUBHEADING: Color = Color::White;
pub const ERROR: Color = Color::Red;

/// Applies colors, or passes text through untouched when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: impl Display, color: Color) -> String {
        let text = text.to_string();
        if self.enabled {
            text.with(color).to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_change_color() {
        assert_eq!(change_color(dec!(0.5)), Color::Green);
        assert_eq!(change_color(dec!(0)), Color::Green);
        assert_eq!(change_color(dec!(-0.01)), Color::Red);
    }

    #[test]
    fn test_plain_painter_passes_through() {
        assert_eq!(Painter::new(false).paint("GGAL", Color::Yellow), "GGAL");
    }

    #[test]
    fn test_color_painter_wraps_text() {
        let painted = Painter::new(true).paint("+1.00", Color::Green);
        assert!(painted.contains("+1.00"));
    }
}
