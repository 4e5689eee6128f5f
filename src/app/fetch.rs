use eframe::egui;

use super::rt;
use crate::feed;

/// Messages for thumbnail loading, keyed by source URL.
pub enum ThumbMsg {
    Ok {
        url: String,
        w: usize,
        h: usize,
        rgba: Vec<u8>,
    },
    Err {
        url: String,
    },
}

impl super::SpaceGalleryApp {
    /// Start async fetch of the gallery window.
    pub(super) fn start_fetch(&mut self, ctx: &egui::Context) {
        // Restarting while a request is in flight is allowed; the generation
        // id makes poll_incoming drop whichever result arrives stale.
        self.net.loading = true;
        self.net.last_error = None;
        self.net.last_result = None;
        ctx.request_repaint();

        self.net.counter = self.net.counter.wrapping_add(1);
        let req_id = self.net.counter;

        let tx = self.net.tx.clone();
        let ctx2 = ctx.clone();
        rt().spawn(async move {
            let res = feed::fetch_gallery().await;
            if let Err(err) = &res {
                log::error!("Error fetching images: {err}");
            }
            let _ = tx.send((req_id, res));
            ctx2.request_repaint();
        });
    }

    /// Schedule background thumbnail downloads for the current result (idempotent).
    pub(super) fn schedule_thumb_downloads(&mut self, ctx: &egui::Context) {
        let Some(items) = &self.net.last_result else {
            return;
        };
        for item in items {
            let url = item.thumbnail_source();
            if url.is_empty()
                || self.images.thumbs.contains_key(url)
                || self.images.thumbs_loading.contains(url)
            {
                continue;
            }
            self.images.thumbs_loading.insert(url.to_string());

            let url = url.to_string();
            let tx = self.images.thumb_tx.clone();
            let ctx2 = ctx.clone();
            rt().spawn(async move {
                let msg = match feed::fetch_image(&url).await {
                    Ok((w, h, rgba)) => ThumbMsg::Ok { url, w, h, rgba },
                    Err(err) => {
                        log::warn!("thumb fetch failed: err={} url={}", err, url);
                        ThumbMsg::Err { url }
                    }
                };
                let _ = tx.send(msg);
                ctx2.request_repaint();
            });
        }
    }

    /// Poll incoming async messages and update state accordingly.
    pub(super) fn poll_incoming(&mut self, ctx: &egui::Context) {
        // Gallery results
        while let Ok((id, res)) = self.net.rx.try_recv() {
            if id != self.net.counter {
                log::debug!("dropping result of superseded request {id}");
                continue;
            }
            self.net.loading = false;
            match res {
                Ok(items) => {
                    log::info!("Displayed {} images", items.len());
                    self.net.last_error = None;
                    self.net.last_result = Some(items);
                    self.schedule_thumb_downloads(ctx);
                }
                Err(e) => {
                    self.net.last_result = None;
                    self.net.last_error = Some(e.to_string());
                }
            }
        }

        // Thumbnails
        while let Ok(msg) = self.images.thumb_rx.try_recv() {
            match msg {
                ThumbMsg::Ok { url, w, h, rgba } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied([w, h], &rgba);
                    let tex = ctx.load_texture(
                        format!("thumb_{}", url),
                        image,
                        egui::TextureOptions::default(),
                    );
                    log::debug!("thumb ok: size={}x{} url={}", w, h, url);
                    self.images.thumbs_loading.remove(&url);
                    self.images.thumbs.insert(url, tex);
                }
                ThumbMsg::Err { url } => {
                    self.images.thumbs_loading.remove(&url);
                }
            }
        }
    }
}
