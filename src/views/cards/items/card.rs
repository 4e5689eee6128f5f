use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use super::cover::draw_cover;
use crate::media::MediaItem;
use crate::ui_constants::{card as card_ui, spacing, EXPLANATION_PREVIEW_CHARS};

/// Click info returned by media_card so the caller can open the detail view.
pub struct CardResponse {
    pub clicked: bool,
}

/// Fixed-width gallery card. Strictly constrained to `width` so rows form a
/// proper grid.
/// - `thumb`: decoded thumbnail texture, if already downloaded
pub fn media_card(
    ui: &mut egui::Ui,
    item: &MediaItem,
    width: f32,
    thumb: Option<&egui::TextureHandle>,
) -> CardResponse {
    let fill = Color32::from_rgb(36, 36, 36);
    let stroke = Stroke::new(1.0, Color32::from_rgb(64, 64, 64));

    // Hard limit the card width inside the row.
    ui.set_min_width(width);
    ui.set_max_width(width);

    let mut clicked = false;

    egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(Rounding::same(card_ui::ROUNDING))
        .inner_margin(egui::Margin::symmetric(
            card_ui::INNER_MARGIN,
            card_ui::INNER_MARGIN,
        ))
        .show(ui, |ui| {
            let inner_w = width - card_ui::INNER_MARGIN * 2.0;
            ui.set_width(inner_w);

            // Cover area is the click target; for videos it includes the
            // play overlay.
            clicked = draw_cover(ui, item, inner_w, thumb);

            ui.add_space(card_ui::POST_COVER_GAP);
            ui.label(
                RichText::new(&item.title)
                    .heading()
                    .color(Color32::from_rgb(230, 230, 230)),
            );
            ui.add_space(spacing::SMALL);
            ui.label(
                RichText::new(&item.date)
                    .small()
                    .color(Color32::from_rgb(170, 170, 170)),
            );
            ui.add_space(spacing::SMALL);
            // Preview only; the full explanation lives in the detail view.
            ui.label(
                RichText::new(preview_text(&item.explanation, EXPLANATION_PREVIEW_CHARS))
                    .small()
                    .color(Color32::from_rgb(190, 190, 190)),
            );
            if let Some(line) = item.copyright_line() {
                ui.add_space(spacing::SMALL);
                ui.label(
                    RichText::new(line)
                        .small()
                        .italics()
                        .color(Color32::from_rgb(150, 150, 150)),
                );
            }
        });

    CardResponse { clicked }
}

/// Char-safe truncation with an ellipsis.
fn preview_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max_chars).collect();
        t.push('…');
        t
    }
}

#[cfg(test)]
mod tests {
    use super::preview_text;

    #[test]
    fn preview_respects_char_boundaries() {
        assert_eq!(preview_text("short", 10), "short");
        assert_eq!(preview_text("abcdef", 3), "abc…");
        // Multibyte input must not split a codepoint.
        assert_eq!(preview_text("αβγδε", 2), "αβ…");
    }
}
