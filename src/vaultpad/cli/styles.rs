use console::Style;
use once_cell::sync::Lazy;

const ACCENT_PURPLE: (u8, u8, u8) = (138, 79, 255);
const ACCENT_BLUE: (u8, u8, u8) = (66, 165, 245);
const TEXT_MUTED: (u8, u8, u8) = (100, 100, 100);

pub static HEADING1: Lazy<Style> =
    Lazy::new(|| Style::new().color256(rgb_to_ansi256(ACCENT_PURPLE)).bold());
pub static HEADING2: Lazy<Style> =
    Lazy::new(|| Style::new().color256(rgb_to_ansi256(ACCENT_BLUE)).bold());
pub static BULLET: Lazy<Style> =
    Lazy::new(|| Style::new().color256(rgb_to_ansi256(ACCENT_PURPLE)));
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(rgb_to_ansi256(TEXT_MUTED)));
pub static TIME: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .color256(rgb_to_ansi256((154, 154, 154)))
        .italic()
});
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static DIRTY: Lazy<Style> = Lazy::new(|| Style::new().yellow());

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Apply `style` only when color output is wanted.
pub fn paint(style: &Style, text: &str, use_color: bool) -> String {
    if use_color {
        style.apply_to(text).force_styling(true).to_string()
    } else {
        text.to_string()
    }
}
