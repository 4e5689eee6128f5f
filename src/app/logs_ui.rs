// Logs viewport (separate OS window) with colored levels and utilities.

use eframe::egui;
use lazy_static::lazy_static;
use log::Level;
use std::sync::RwLock;

lazy_static! {
    static ref LOGS_OPEN: RwLock<bool> = RwLock::new(false);
    static ref AUTOSCROLL: RwLock<bool> = RwLock::new(true);
}

pub fn open_logs() {
    if let Ok(mut v) = LOGS_OPEN.write() {
        *v = true;
    }
}

pub fn draw_logs_viewport(ctx: &egui::Context) {
    let is_open = LOGS_OPEN.read().map(|g| *g).unwrap_or(false);
    if !is_open {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("logs_window");

    ctx.show_viewport_deferred(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title("Logs")
            .with_inner_size([760.0, 480.0])
            .with_resizable(true),
        move |ctx, _class| {
            // OS close (X) marks the window closed.
            if ctx.input(|i| i.viewport().close_requested()) {
                if let Ok(mut v) = LOGS_OPEN.write() {
                    *v = false;
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        crate::logger::clear();
                    }
                    if ui.button("Copy").clicked() {
                        let text = crate::logger::get_all().join("\n");
                        ui.output_mut(|o| o.copied_text = text);
                    }
                    let mut autoscroll = AUTOSCROLL.read().map(|g| *g).unwrap_or(true);
                    if ui.checkbox(&mut autoscroll, "Autoscroll").changed() {
                        if let Ok(mut w) = AUTOSCROLL.write() {
                            *w = autoscroll;
                        }
                    }
                    ui.separator();
                    ui.label(format!("{} lines", crate::logger::len()));
                });
                ui.separator();

                let autoscroll = AUTOSCROLL.read().map(|g| *g).unwrap_or(true);
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(autoscroll)
                    .show(ui, |ui| {
                        crate::logger::for_each(|entry| {
                            let color = match entry.level {
                                Level::Error => egui::Color32::from_rgb(230, 80, 80),
                                Level::Warn => egui::Color32::from_rgb(230, 180, 60),
                                Level::Info => egui::Color32::from_rgb(200, 200, 200),
                                Level::Debug => egui::Color32::from_gray(140),
                                Level::Trace => egui::Color32::from_gray(100),
                            };
                            ui.label(
                                egui::RichText::new(format!(
                                    "[{:>5}] {}: {}",
                                    entry.level, entry.target, entry.msg
                                ))
                                .monospace()
                                .color(color),
                            );
                        });
                    });
            });
        },
    );
}
