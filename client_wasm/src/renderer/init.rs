use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::error::{ClientError, Result};

pub struct CanvasContext {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(ClientError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(ClientError::NoDocument)
}

/// Current window inner size in CSS pixels
pub fn window_size() -> Result<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

/// Look up the game canvas and its 2D context
pub fn init_canvas(canvas_id: &str) -> Result<CanvasContext> {
    let canvas = document()?
        .get_element_by_id(canvas_id)
        .ok_or_else(|| ClientError::MissingElement(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ClientError::WrongElement(canvas_id.to_string(), "canvas"))?;

    let ctx = canvas
        .get_context("2d")?
        .ok_or(ClientError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ClientError::NoContext)?;

    Ok(CanvasContext { canvas, ctx })
}
