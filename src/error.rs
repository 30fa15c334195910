// Error types for the particle network

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors produced while reading a theme colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input was empty or only whitespace.
    Empty,
    /// The input did not have the shape of any accepted colour syntax.
    Malformed(String),
    /// A hue, saturation, lightness, alpha or hex component was not a number.
    InvalidComponent(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Empty => write!(f, "empty color value"),
            ColorError::Malformed(input) => write!(f, "unrecognized color syntax: {:?}", input),
            ColorError::InvalidComponent(part) => {
                write!(f, "invalid color component: {:?}", part)
            }
        }
    }
}

impl std::error::Error for ColorError {}

impl From<ColorError> for JsValue {
    fn from(e: ColorError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
