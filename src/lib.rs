#[macro_use]
mod utils;

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod network;
pub mod particle;
pub mod pointer;
pub mod surface;
pub mod theme;

use wasm_bindgen::prelude::*;

pub use color::{Color, ThemeColors};
pub use config::FieldConfig;
pub use error::ColorError;
pub use field::ParticleField;
pub use network::ParticleNetwork;
pub use particle::Particle;
pub use pointer::Pointer;
pub use surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
