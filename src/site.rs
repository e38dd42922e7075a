//! Application state for one storefront page and the gallery/video
//! load-and-render cycle.

use std::cell::{Cell, RefCell};

use crate::config::SiteConfig;
use crate::dom::{ids, Page};
use crate::lazy::LazyImages;
use crate::loader::{self, JsonSource};
use crate::modal::ModalState;
use crate::models::design::Design;
use crate::models::video::Video;
use crate::render;
use crate::ui_state::{self, Panel, PanelState};

/// Owns everything the page script used to keep in globals.
///
/// Single-threaded: each panel's records are written only by that panel's
/// load path and read only by its render path, so plain `Cell`/`RefCell`
/// suffice. No borrow is held across an `.await`.
pub struct Site<P: Page, S: JsonSource> {
    pub(crate) config: SiteConfig,
    pub(crate) page: P,
    pub(crate) source: S,
    pub(crate) designs: RefCell<Vec<Design>>,
    pub(crate) videos: RefCell<Vec<Video>>,
    pub(crate) gallery_state: Cell<Option<PanelState>>,
    pub(crate) videos_state: Cell<Option<PanelState>>,
    pub(crate) modal: Cell<ModalState>,
    pub(crate) lazy: RefCell<LazyImages>,
    pub(crate) initialized: Cell<bool>,
}

impl<P: Page, S: JsonSource> Site<P, S> {
    pub fn new(config: SiteConfig, page: P, source: S) -> Self {
        Site {
            config,
            page,
            source,
            designs: RefCell::new(Vec::new()),
            videos: RefCell::new(Vec::new()),
            gallery_state: Cell::new(None),
            videos_state: Cell::new(None),
            modal: Cell::new(ModalState::Closed),
            lazy: RefCell::new(LazyImages::default()),
            initialized: Cell::new(false),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn designs(&self) -> Vec<Design> {
        self.designs.borrow().clone()
    }

    pub fn videos(&self) -> Vec<Video> {
        self.videos.borrow().clone()
    }

    /// Last state shown on `panel`; `None` before the first load.
    pub fn panel_state(&self, panel: Panel) -> Option<PanelState> {
        self.state_cell(panel).get()
    }

    pub fn modal_state(&self) -> ModalState {
        self.modal.get()
    }

    fn state_cell(&self, panel: Panel) -> &Cell<Option<PanelState>> {
        match panel {
            Panel::Gallery => &self.gallery_state,
            Panel::Videos => &self.videos_state,
        }
    }

    pub(crate) fn show(&self, panel: Panel, state: PanelState) {
        ui_state::show(&self.page, panel, state);
        self.state_cell(panel).set(Some(state));
    }

    // ── Loading ─────────────────────────────────────────

    /// Load both panels concurrently. Each panel contains its own failures,
    /// so a slow or broken document never holds back the other panel.
    pub async fn load_all(&self) {
        futures::join!(self.load_gallery(), self.load_videos());
        log::info!("[boot] initial load finished");
    }

    pub async fn load_panel(&self, panel: Panel) {
        match panel {
            Panel::Gallery => self.load_gallery().await,
            Panel::Videos => self.load_videos().await,
        }
    }

    pub async fn load_gallery(&self) {
        self.show(Panel::Gallery, PanelState::Loading);

        match loader::fetch_gallery(&self.source, &self.config.gallery_url).await {
            Ok(doc) => {
                let last_updated = doc
                    .last_updated
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .unwrap_or(self.config.last_updated_placeholder.as_str());
                self.page.set_text(ids::LAST_UPDATED, last_updated);
                log::info!("[gallery] loaded {} designs", doc.designs.len());
                *self.designs.borrow_mut() = doc.designs;
            }
            Err(e) => {
                log::error!("[gallery] Error loading gallery: {}", e);
                self.show(Panel::Gallery, PanelState::Error);
                *self.designs.borrow_mut() = Design::fallback();
            }
        }
        self.render_designs();
    }

    pub async fn load_videos(&self) {
        self.show(Panel::Videos, PanelState::Loading);

        match loader::fetch_videos(&self.source, &self.config.videos_url).await {
            Ok(doc) => {
                log::info!("[videos] loaded {} videos", doc.videos.len());
                *self.videos.borrow_mut() = doc.videos;
            }
            Err(e) => {
                log::warn!("[videos] Error loading videos, using built-in list: {}", e);
                *self.videos.borrow_mut() = Video::fallback();
            }
        }
        self.render_videos();
    }

    // ── Rendering ───────────────────────────────────────

    /// Rebuild the gallery grid from the current design list.
    pub fn render_designs(&self) {
        let container = Panel::Gallery.container();
        if !self.page.set_inner_html(container, "") {
            log::error!("[gallery] Gallery container not found!");
            return;
        }

        let designs = self.designs.borrow();
        if designs.is_empty() {
            self.show(Panel::Gallery, PanelState::Empty);
            return;
        }

        self.show(Panel::Gallery, PanelState::Content);
        for (index, design) in designs.iter().enumerate() {
            self.page
                .append_html(container, &render::design_card(&self.config, design, index));
        }
    }

    pub fn render_videos(&self) {
        let container = Panel::Videos.container();
        if !self.page.set_inner_html(container, "") {
            log::error!("[videos] Videos grid not found!");
            return;
        }

        let videos = self.videos.borrow();
        if videos.is_empty() {
            self.show(Panel::Videos, PanelState::Empty);
            return;
        }

        self.show(Panel::Videos, PanelState::Content);
        for (index, video) in videos.iter().enumerate() {
            self.page
                .append_html(container, &render::video_card(video, index));
        }
    }
}
