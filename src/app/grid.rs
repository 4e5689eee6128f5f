use eframe::egui;

use crate::media::MediaItem;
use crate::views::cards::media_card;

/// Grid rendering split from app.rs.
impl super::SpaceGalleryApp {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn draw_gallery(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        items: &[MediaItem],
        cols: usize,
        left_pad: f32,
        gap: f32,
        card_w: f32,
    ) {
        // An empty but well-formed feed renders nothing, silently.
        if items.is_empty() {
            return;
        }
        let cols = cols.max(1);
        let rows = (items.len() + cols - 1) / cols;

        for row in 0..rows {
            ui.horizontal_top(|ui| {
                ui.add_space(left_pad);
                ui.spacing_mut().item_spacing.x = gap;
                for col in 0..cols {
                    let index = row * cols + col;
                    let Some(item) = items.get(index) else {
                        break;
                    };
                    ui.vertical(|ui| {
                        ui.set_min_width(card_w);
                        ui.set_max_width(card_w);
                        let thumb = self.images.thumbs.get(item.thumbnail_source());
                        let card = media_card(ui, item, card_w, thumb);
                        if card.clicked {
                            self.detail.open(item.clone());
                            ctx.request_repaint();
                        }
                    });
                }
            });
            ui.add_space(gap);
        }
    }
}
