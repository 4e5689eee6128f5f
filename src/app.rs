// Application state and top-level frame dispatch. Fetch plumbing, the card
// grid, and the detail overlay live in submodules.

use eframe::{egui, App};

use crate::facts;

mod detail;
mod fetch;
mod grid;
mod logs_ui;
mod main_screen;
mod runtime;
mod state;

pub use fetch::ThumbMsg;
pub use runtime::rt;

use detail::DetailView;
use state::{ImagesState, NetState};

pub struct SpaceGalleryApp {
    pub(crate) net: NetState,
    pub(crate) images: ImagesState,
    pub(crate) detail: DetailView,
    /// Picked once at startup, shown in the top bar.
    pub(crate) fact: &'static str,
}

impl Default for SpaceGalleryApp {
    fn default() -> Self {
        Self {
            net: NetState::new(),
            images: ImagesState::new(),
            detail: DetailView::new(),
            fact: facts::random_fact(),
        }
    }
}

impl App for SpaceGalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? repaint so the logs window stays fresh.
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }
        main_screen::update_main(self, ctx);
    }
}
