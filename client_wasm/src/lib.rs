//! Canvas 2D client for the neon Pong game
//!
//! Simulation lives in `game_core`; this crate maps browser input onto it,
//! plays sounds and draws each frame. Browser-only modules compile on wasm32.

pub mod color;
pub mod error;
pub mod input;
pub mod state;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point called from the page once the module is loaded
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn launch(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }
    app::launch(canvas_id).map_err(JsValue::from)
}
