// ============================================================================
// QUICKAID VOLUNTEER - Yew frontend (WASM)
// ============================================================================
// - views:      routed pages (home, authorization, dashboard)
// - components: reusable widgets
// - hooks:      page logic (auth, dashboard)
// - services:   HTTP, upload and Socket.IO alert feed
// - stores:     session credentials + dashboard reducer
// - models:     backend wire types
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod views;

use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

/// Installs panic hook + logger and mounts the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚑 QuickAid volunteer client ({})", CONFIG.environment);
    log::debug!("Backend: {}, alerts: {}", CONFIG.backend_url, CONFIG.socket_base_url());

    yew::Renderer::<App>::new().render();
}
