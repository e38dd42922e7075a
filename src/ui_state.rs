use crate::dom::{ids, Display, Page};

/// The two independent content regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Gallery,
    Videos,
}

/// Which of a panel's four regions is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Loading,
    Error,
    Empty,
    Content,
}

/// Element ids of one panel's four mutually exclusive regions.
pub struct Regions {
    pub loading: &'static str,
    pub error: &'static str,
    pub empty: &'static str,
    pub content: &'static str,
}

impl Panel {
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Gallery => "gallery",
            Panel::Videos => "videos",
        }
    }

    pub fn regions(&self) -> Regions {
        match self {
            Panel::Gallery => Regions {
                loading: ids::GALLERY_LOADING,
                error: ids::GALLERY_ERROR,
                empty: ids::GALLERY_EMPTY,
                content: ids::GALLERY_CONTAINER,
            },
            Panel::Videos => Regions {
                loading: ids::VIDEOS_LOADING,
                error: ids::VIDEOS_ERROR,
                empty: ids::VIDEOS_EMPTY,
                content: ids::VIDEOS_GRID,
            },
        }
    }

    pub fn retry_button(&self) -> &'static str {
        match self {
            Panel::Gallery => ids::RETRY_GALLERY,
            Panel::Videos => ids::RETRY_VIDEOS,
        }
    }

    pub fn container(&self) -> &'static str {
        self.regions().content
    }
}

/// Make exactly one of the panel's regions visible. Regions missing from
/// the page are skipped.
pub fn show<P: Page>(page: &P, panel: Panel, state: PanelState) {
    let regions = panel.regions();
    let pick = |target: PanelState, on: Display| {
        if state == target {
            on
        } else {
            Display::None
        }
    };
    let updates = [
        (regions.loading, pick(PanelState::Loading, Display::Block)),
        (regions.error, pick(PanelState::Error, Display::Block)),
        (regions.empty, pick(PanelState::Empty, Display::Block)),
        (regions.content, pick(PanelState::Content, Display::Grid)),
    ];
    for (id, display) in updates {
        if !page.set_display(id, display) {
            log::debug!("[{}] region #{} not on page", panel.name(), id);
        }
    }
}
