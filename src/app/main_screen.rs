use eframe::egui::{self, RichText};

use super::{logs_ui, SpaceGalleryApp};
use crate::ui_constants::{spacing, CARD_GAP};
use crate::views::cards::CARD_WIDTH;

pub(super) fn update_main(app: &mut SpaceGalleryApp, ctx: &egui::Context) {
    // Incoming async messages (gallery result, thumbnails)
    app.poll_incoming(ctx);

    // Keep thumbnails scheduled for the current result (idempotent)
    app.schedule_thumb_downloads(ctx);

    let mut fetch_clicked = false;
    let mut open_logs = false;
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.add_space(spacing::MEDIUM);
        ui.horizontal(|ui| {
            ui.heading("Space Gallery");
            ui.separator();
            ui.label(
                RichText::new(format!("💡 {}", app.fact))
                    .italics()
                    .color(egui::Color32::from_rgb(180, 180, 180)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                open_logs = ui.button("Logs").clicked();
                fetch_clicked = ui
                    .add_enabled(!app.net.loading, egui::Button::new("Get Space Images"))
                    .clicked();
            });
        });
        ui.add_space(spacing::MEDIUM);
    });
    if fetch_clicked {
        app.start_fetch(ctx);
    }
    if open_logs {
        logs_ui::open_logs();
        ctx.request_repaint();
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let avail_w = ui.available_width().floor();
                let card_w = CARD_WIDTH;
                let gap = CARD_GAP;

                let mut cols = ((avail_w + gap) / (card_w + gap)).floor() as usize;
                if cols == 0 {
                    cols = 1;
                }
                let row_w = (cols as f32) * card_w + ((cols - 1) as f32) * gap;
                let left_pad = ((avail_w - row_w) / 2.0).max(0.0);

                if app.net.last_error.is_some() {
                    // Cause already went to the log; the user gets one line.
                    ui.add_space(spacing::XLARGE);
                    ui.vertical_centered(|ui| {
                        ui.colored_label(
                            egui::Color32::from_rgb(230, 80, 80),
                            "Error loading images. Please try again.",
                        );
                    });
                } else if app.net.loading && app.net.last_result.is_none() {
                    ui.add_space(spacing::XLARGE);
                    ui.vertical_centered(|ui| {
                        ui.add(egui::Spinner::new());
                        ui.label("Loading...");
                    });
                } else if let Some(items) = app.net.last_result.clone() {
                    // Clone so the grid can borrow `app` mutably while drawing.
                    app.draw_gallery(ui, ctx, &items, cols, left_pad, gap, card_w);
                } else {
                    ui.add_space(spacing::XLARGE);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("🔭 Click \"Get Space Images\" to explore the cosmos")
                                .size(18.0)
                                .color(egui::Color32::from_rgb(180, 180, 180)),
                        );
                    });
                }
            });
    });

    // Overlay above everything else
    app.draw_detail(ctx);
    logs_ui::draw_logs_viewport(ctx);
}
