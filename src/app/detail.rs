// Detail overlay for one selected gallery entry. State transitions are plain
// methods on DetailView so they stay testable without a GUI context.

use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use crate::media::{MediaItem, MediaType};
use crate::ui_constants::{detail as detail_ui, spacing};
use crate::views::cards::draw_cover;

/// Embedded playback surface, created lazily on the first video open and
/// reused afterwards. A cleared `src` means playback is stopped.
#[derive(Debug, Default)]
pub struct VideoFrame {
    pub src: Option<String>,
}

/// Two-state overlay: hidden until an entry is opened, hidden again on close.
#[derive(Debug, Default)]
pub struct DetailView {
    open: bool,
    item: Option<MediaItem>,
    video: Option<VideoFrame>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn item(&self) -> Option<&MediaItem> {
        self.item.as_ref()
    }

    pub fn video(&self) -> Option<&VideoFrame> {
        self.video.as_ref()
    }

    /// Show `item`. Re-entrant: opening while already shown swaps content
    /// without passing through the hidden state.
    pub fn open(&mut self, item: MediaItem) {
        match item.media_type {
            MediaType::Video => {
                let frame = self.video.get_or_insert_with(VideoFrame::default);
                frame.src = Some(item.url.clone());
            }
            MediaType::Image => {
                // Stop playback left over from a previously shown video.
                if let Some(frame) = &mut self.video {
                    frame.src = None;
                }
            }
        }
        self.item = Some(item);
        self.open = true;
    }

    /// Hide the overlay and stop playback. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.open = false;
        if let Some(frame) = &mut self.video {
            frame.src = None;
        }
    }
}

/// Open a URL in the system default browser without invoking a shell.
fn open_in_browser(url: &str) {
    #[cfg(target_os = "windows")]
    let cmd = "explorer";
    #[cfg(target_os = "macos")]
    let cmd = "open";
    #[cfg(all(unix, not(target_os = "macos")))]
    let cmd = "xdg-open";

    if let Err(e) = std::process::Command::new(cmd).arg(url).spawn() {
        log::error!("Failed to open browser for {}: {}", url, e);
    }
}

impl super::SpaceGalleryApp {
    /// Draw the dimmed overlay and the centered content panel.
    pub(super) fn draw_detail(&mut self, ctx: &egui::Context) {
        if !self.detail.is_open() {
            return;
        }
        let Some(item) = self.detail.item().cloned() else {
            return;
        };

        let screen = ctx.screen_rect();
        let mut close_requested = false;

        let panel_w = (screen.width() - 2.0 * detail_ui::MARGIN).min(detail_ui::PANEL_MAX_W);
        let panel_h = (screen.height() - 2.0 * detail_ui::MARGIN).clamp(200.0, 640.0);
        let panel_rect =
            egui::Rect::from_center_size(screen.center(), egui::vec2(panel_w, panel_h));
        let inner_w = panel_w - 2.0 * detail_ui::INNER_MARGIN;

        // One area holds the dim layer, a click interceptor for the panel,
        // and the panel content. Registration order decides hit priority:
        // content widgets beat the interceptor, the interceptor beats the
        // dim layer, so only clicks outside the panel close the overlay.
        egui::Area::new("detail_overlay".into())
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let bg = ui.allocate_rect(screen, egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, Rounding::ZERO, Color32::from_black_alpha(180));
                if bg.clicked() {
                    close_requested = true;
                }

                let _panel_bg = ui.interact(
                    panel_rect,
                    ui.id().with("detail_panel"),
                    egui::Sense::click(),
                );

                let mut panel_ui =
                    ui.child_ui(panel_rect, egui::Layout::top_down(egui::Align::Min));
                egui::Frame::none()
                    .fill(Color32::from_rgb(30, 30, 30))
                    .stroke(Stroke::new(1.0, Color32::from_rgb(64, 64, 64)))
                    .rounding(Rounding::same(detail_ui::ROUNDING))
                    .inner_margin(egui::Margin::same(detail_ui::INNER_MARGIN))
                    .show(&mut panel_ui, |ui| {
                        ui.set_width(inner_w);
                        ui.set_height(panel_h - 2.0 * detail_ui::INNER_MARGIN);

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(&item.title)
                                    .heading()
                                    .color(Color32::from_rgb(230, 230, 230)),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Min),
                                |ui| {
                                    if ui.button("✖").clicked() {
                                        close_requested = true;
                                    }
                                },
                            );
                        });
                        ui.add_space(spacing::SMALL);

                        egui::ScrollArea::vertical()
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                self.draw_detail_media(ui, &item, inner_w);

                                ui.add_space(spacing::MEDIUM);
                                ui.label(
                                    RichText::new(&item.date)
                                        .small()
                                        .color(Color32::from_rgb(170, 170, 170)),
                                );
                                ui.add_space(spacing::SMALL);
                                ui.label(&item.explanation);
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
                    });
            });

        if close_requested {
            self.detail.close();
            ctx.request_repaint();
        }
    }

    /// Media area: embedded frame surface for videos, plain image otherwise.
    fn draw_detail_media(&self, ui: &mut egui::Ui, item: &MediaItem, inner_w: f32) {
        match item.media_type {
            MediaType::Video => {
                // The frame surface shows the thumbnail with the play
                // affordance; activation hands playback to the browser.
                let thumb = self.images.thumbs.get(item.thumbnail_source());
                let clicked = draw_cover(ui, item, inner_w, thumb);
                if clicked {
                    if let Some(src) = self.detail.video().and_then(|f| f.src.as_deref()) {
                        open_in_browser(src);
                    }
                }
            }
            MediaType::Image => {
                match self.images.thumbs.get(item.thumbnail_source()) {
                    Some(tex) => {
                        ui.add(
                            egui::Image::new(tex)
                                .max_width(inner_w)
                                .max_height(detail_ui::MEDIA_MAX_H)
                                .rounding(Rounding::same(detail_ui::ROUNDING)),
                        );
                    }
                    None => {
                        // Still downloading
                        ui.vertical_centered(|ui| {
                            ui.add_space(spacing::XLARGE);
                            ui.add(egui::Spinner::new());
                            ui.add_space(spacing::XLARGE);
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_item() -> MediaItem {
        MediaItem {
            title: "A".into(),
            date: "2024-01-01".into(),
            explanation: "x".into(),
            url: "img1.jpg".into(),
            media_type: MediaType::Image,
            thumbnail_url: None,
            copyright: None,
        }
    }

    fn video_item(url: &str) -> MediaItem {
        MediaItem {
            title: "V".into(),
            date: "2024-01-02".into(),
            explanation: "y".into(),
            url: url.into(),
            media_type: MediaType::Video,
            thumbnail_url: Some("t.jpg".into()),
            copyright: None,
        }
    }

    #[test]
    fn starts_hidden_with_no_video_frame() {
        let view = DetailView::new();
        assert!(!view.is_open());
        assert!(view.item().is_none());
        assert!(view.video().is_none());
    }

    #[test]
    fn opening_an_image_never_creates_the_frame() {
        let mut view = DetailView::new();
        view.open(image_item());
        assert!(view.is_open());
        assert!(view.video().is_none());
    }

    #[test]
    fn opening_a_video_points_the_frame_at_its_url() {
        let mut view = DetailView::new();
        view.open(video_item("v.mp4"));
        assert!(view.is_open());
        assert_eq!(
            view.video().and_then(|f| f.src.as_deref()),
            Some("v.mp4")
        );
    }

    #[test]
    fn frame_is_reused_across_video_opens() {
        let mut view = DetailView::new();
        view.open(video_item("first.mp4"));
        view.open(video_item("second.mp4"));
        assert_eq!(
            view.video().and_then(|f| f.src.as_deref()),
            Some("second.mp4")
        );
    }

    #[test]
    fn video_then_image_clears_the_frame_source() {
        let mut view = DetailView::new();
        view.open(video_item("v.mp4"));
        view.open(image_item());
        assert!(view.is_open());
        assert_eq!(view.item().map(|i| i.title.as_str()), Some("A"));
        // Frame still exists but no longer plays anything.
        assert!(view.video().is_some());
        assert!(view.video().and_then(|f| f.src.as_deref()).is_none());
    }

    #[test]
    fn close_stops_playback_and_is_idempotent() {
        let mut view = DetailView::new();
        view.open(video_item("v.mp4"));
        view.close();
        assert!(!view.is_open());
        assert!(view.video().and_then(|f| f.src.as_deref()).is_none());
        view.close();
        assert!(!view.is_open());
    }

    #[test]
    fn reopening_after_close_restores_playback() {
        let mut view = DetailView::new();
        view.open(video_item("v.mp4"));
        view.close();
        view.open(video_item("v.mp4"));
        assert!(view.is_open());
        assert_eq!(
            view.video().and_then(|f| f.src.as_deref()),
            Some("v.mp4")
        );
    }
}
