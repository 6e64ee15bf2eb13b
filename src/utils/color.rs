use ratatui::style::Color;

/// Parse a theme color token into a terminal color.
///
/// Accepts `#rrggbb` hex strings as well as a small set of named palette
/// colors so hand-written config files stay readable. Returns `None` for
/// anything else; the theme layer turns that into a configuration error
/// instead of guessing.
#[must_use]
pub fn parse_color(token: &str) -> Option<Color> {
    let token = token.trim();

    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex);
    }

    match token.to_lowercase().as_str() {
        "navy" => Some(Color::Rgb(30, 58, 95)),
        "slate" => Some(Color::Rgb(100, 116, 139)),
        "cyan" => Some(Color::Rgb(6, 182, 212)),
        "emerald" => Some(Color::Rgb(16, 185, 129)),
        "amber" => Some(Color::Rgb(245, 158, 11)),
        "red" => Some(Color::Rgb(239, 68, 68)),
        "white" => Some(Color::Rgb(241, 245, 249)),
        "black" => Some(Color::Rgb(15, 23, 42)),
        "grey" | "gray" => Some(Color::Rgb(148, 163, 184)),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
