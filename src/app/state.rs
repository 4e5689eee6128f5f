// App state containers, split from app.rs.

use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use super::fetch::ThumbMsg;
use crate::feed::FeedError;
use crate::media::MediaItem;

pub struct NetState {
    /// Monotonically increasing fetch generation; results from a superseded
    /// request are dropped in poll_incoming.
    pub counter: u64,
    pub loading: bool,
    pub tx: mpsc::Sender<(u64, Result<Vec<MediaItem>, FeedError>)>,
    pub rx: mpsc::Receiver<(u64, Result<Vec<MediaItem>, FeedError>)>,
    pub last_result: Option<Vec<MediaItem>>,
    pub last_error: Option<String>,
}

impl NetState {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            counter: 0,
            loading: false,
            tx,
            rx,
            last_result: None,
            last_error: None,
        }
    }
}

pub struct ImagesState {
    /// Decoded thumbnail textures keyed by source URL. URL keys stay valid
    /// across refetches, so late deliveries from an old request are harmless.
    pub thumbs: HashMap<String, egui::TextureHandle>,
    pub thumbs_loading: HashSet<String>,
    pub thumb_tx: mpsc::Sender<ThumbMsg>,
    pub thumb_rx: mpsc::Receiver<ThumbMsg>,
}

impl ImagesState {
    pub fn new() -> Self {
        let (thumb_tx, thumb_rx) = mpsc::channel();
        Self {
            thumbs: HashMap::new(),
            thumbs_loading: HashSet::new(),
            thumb_tx,
            thumb_rx,
        }
    }
}
