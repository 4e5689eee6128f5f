use eframe::egui::{self, Color32, FontId, Rounding, Sense, Stroke, Vec2};

use crate::media::MediaItem;
use crate::ui_constants::card as card_ui;

/// Draws the cover area with 16:9 ratio across `inner_w`: the thumbnail
/// texture when downloaded, a dark placeholder otherwise. Video entries get a
/// centered play affordance on top. Returns true when the area was clicked.
pub fn draw_cover(
    ui: &mut egui::Ui,
    item: &MediaItem,
    inner_w: f32,
    thumb: Option<&egui::TextureHandle>,
) -> bool {
    let cover_h = inner_w * 9.0 / 16.0;
    let (rect, resp) = ui.allocate_exact_size(Vec2::new(inner_w, cover_h), Sense::click());

    let rounding = Rounding::same(card_ui::COVER_ROUNDING);
    let painter = ui.painter_at(rect);

    match thumb {
        Some(tex) => {
            painter.image(
                tex.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        None => {
            // Thumbnail still downloading (or failed); keep a quiet placeholder.
            painter.rect_filled(rect, rounding, Color32::from_rgb(24, 24, 24));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "✦",
                FontId::proportional(22.0),
                Color32::from_gray(90),
            );
        }
    }
    painter.rect_stroke(rect, rounding, Stroke::new(1.0, Color32::from_gray(40)));

    if item.is_video() {
        // Same affordance in the grid and the detail view.
        let center = rect.center();
        painter.circle_filled(center, card_ui::PLAY_RADIUS, Color32::from_black_alpha(160));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "▶",
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }

    let resp = resp.on_hover_cursor(egui::CursorIcon::PointingHand);
    resp.clicked()
}
