#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod views;
mod worker;

fn main() -> eframe::Result<()> {
    let app_logger = logger::AppLogger::new(256);
    if app_logger.clone().init().is_err() {
        eprintln!("Failed to install logger");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to start tokio runtime");
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title("Image to PDF"),
        ..Default::default()
    };

    eframe::run_native(
        "Image to PDF",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::AlbumApp::new(cc, tokio_handle, app_logger)))
        }),
    )
}
