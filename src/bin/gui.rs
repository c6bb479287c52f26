// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use arcane_prices::{ config::state::GuiState, file::FALLBACK_PNG, gui, log };
use eframe::egui::{ IconData, ViewportBuilder };

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(FALLBACK_PNG).ok()?.to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    log::init(log::LogTarget::File);

    let defaults = GuiState::default();
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([defaults.window_w as f32, defaults.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        tracing::error!(error = %e, "GUI failed");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
