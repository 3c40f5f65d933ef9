/// Site Marks - bookmark manager
/// Built with Rust + WASM + Yew

pub mod bookmark;
pub mod config;
pub mod error;
pub mod presentation;
pub mod storage;
pub mod store;
pub mod ui;
pub mod validation;

use wasm_bindgen::prelude::*;

use crate::config::AppConfig;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(AppConfig::default().log_level));
}

// Re-export the field rules for JavaScript access
#[wasm_bindgen]
pub fn is_valid_site_name(text: &str) -> bool {
    validation::is_valid_name(text)
}

#[wasm_bindgen]
pub fn is_valid_site_url(text: &str) -> bool {
    validation::is_valid_url(text)
}

#[wasm_bindgen]
pub fn visit_url(url: &str) -> String {
    bookmark::visit_url(url)
}

// Start the Yew app for the bookmark page
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::app::App>::new().render();
}
