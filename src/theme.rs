// Theme colours from the page stylesheet. The palette lives in CSS custom
// properties on the root element, as bare HSL triplets like `210 40% 98%`.

use crate::color::{Color, ThemeColors};
use web_sys::CssStyleDeclaration;

pub const PARTICLE_VAR: &str = "--foreground";
pub const LINE_VAR: &str = "--secondary";
pub const POINTER_LINE_VAR: &str = "--ring";

/// Reads the three colours from `getComputedStyle(document.documentElement)`.
/// Anything missing or unparsable falls back to the default palette, per colour.
pub fn read_theme_colors() -> ThemeColors {
    let defaults = ThemeColors::default();
    let style = match root_style() {
        Some(style) => style,
        None => return defaults,
    };

    ThemeColors::new(
        read_var(&style, PARTICLE_VAR, defaults.particle),
        read_var(&style, LINE_VAR, defaults.line),
        read_var(&style, POINTER_LINE_VAR, defaults.pointer_line),
    )
}

fn root_style() -> Option<CssStyleDeclaration> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    window.get_computed_style(&root).ok().flatten()
}

fn read_var(style: &CssStyleDeclaration, name: &str, fallback: Color) -> Color {
    let value = style.get_property_value(name).unwrap_or_default();
    match resolve(&value) {
        Some(Ok(color)) => color,
        Some(Err(e)) => {
            log!("theme variable {} ignored: {}", name, e);
            fallback
        }
        None => fallback,
    }
}

// None when the variable is unset, which computed style reports as ""
fn resolve(value: &str) -> Option<Result<Color, crate::error::ColorError>> {
    if value.trim().is_empty() {
        None
    } else {
        Some(Color::parse(value))
    }
}
