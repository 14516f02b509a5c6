//! Sprint Buddy: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the session machine, the Gemini adapter and the effect host,
//! and hands them to the egui screens.

mod app;

use buddy_types::{BuddyError, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CANVAS_ID: &str = "buddy_canvas";

/// WASM entry point: called from index.html
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Sprint Buddy starting...");

    let canvas = match find_canvas(CANVAS_ID) {
        Ok(canvas) => canvas,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            return;
        }
    };

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::BuddyApp::new(cc)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
}

fn find_canvas(id: &str) -> Result<web_sys::HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BuddyError::Config("no browser document".to_string()))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| BuddyError::Config(format!("no canvas element with id '{}'", id)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| BuddyError::Config(format!("element '{}' is not a canvas", id)))
}
