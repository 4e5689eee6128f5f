#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point stays minimal: window config and app start only.
// All logic lives in the app module (src/app.rs) and its submodules.

use eframe::{egui, egui_wgpu::WgpuConfiguration, wgpu::PresentMode};

mod app;
mod facts;
mod feed;
mod logger;
mod media;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    // Initialize in-app GUI logger (also mirrors to stderr when enabled)
    logger::init();

    let wgpu_options = WgpuConfiguration {
        present_mode: PresentMode::AutoNoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        vsync: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_title("Space Gallery")
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([420.0, 320.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "Space Gallery",
        native_options,
        Box::new(|_cc| Box::new(app::SpaceGalleryApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
