//! Design detail overlay.

use crate::config::SiteConfig;
use crate::dom::{ids, Display, Page};
use crate::links;
use crate::models::design::Design;
use crate::render::IMAGE_UNAVAILABLE_ALT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    /// Showing the design at this gallery position.
    Open(usize),
}

/// Fill the overlay from `design`, show it and freeze page scrolling.
/// Returns `false` when the page has no overlay to show.
pub fn open<P: Page>(page: &P, config: &SiteConfig, design: &Design) -> bool {
    if !page.exists(ids::MODAL) {
        log::error!("[modal] #{} not on page", ids::MODAL);
        return false;
    }

    page.set_text(ids::MODAL_TITLE, &design.title);
    page.set_attr(ids::MODAL_IMAGE, "src", &design.image);
    page.set_attr(ids::MODAL_IMAGE, "alt", &design.title);
    page.set_attr(ids::MODAL_IMAGE, "data-fallback", &config.placeholder_image);
    page.set_attr(ids::MODAL_IMAGE, "data-fallback-applied", "");
    page.set_text(
        ids::MODAL_DESCRIPTION,
        design.description.as_deref().unwrap_or(""),
    );

    set_badge(page, ids::MODAL_CATEGORY, design.category());
    set_badge(page, ids::MODAL_DATE, design.date());

    page.set_attr(
        ids::WHATSAPP_LINK,
        "href",
        &links::design_whatsapp_url(config, design),
    );
    page.set_attr(ids::EMAIL_LINK, "href", &links::design_mailto(config, design));

    page.set_display(ids::MODAL, Display::Flex);
    page.set_body_overflow("hidden");
    true
}

fn set_badge<P: Page>(page: &P, id: &str, value: Option<&str>) {
    match value {
        Some(v) => {
            page.set_text(id, v);
            page.set_display(id, Display::InlineBlock);
        }
        None => {
            page.set_text(id, "");
            page.set_display(id, Display::None);
        }
    }
}

pub fn close<P: Page>(page: &P) {
    page.set_display(ids::MODAL, Display::None);
    page.set_body_overflow("auto");
}

/// Swap a broken image for the placeholder, at most once per image.
/// Returns `true` when the placeholder was applied.
pub fn apply_image_fallback<P: Page>(page: &P, config: &SiteConfig, image_id: &str) -> bool {
    if page.attr(image_id, "data-fallback-applied").as_deref() == Some("1") {
        return false;
    }
    let placeholder = page
        .attr(image_id, "data-fallback")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| config.placeholder_image.clone());
    let applied = page.set_attr(image_id, "src", &placeholder);
    if applied {
        page.set_attr(image_id, "alt", IMAGE_UNAVAILABLE_ALT);
        page.set_attr(image_id, "data-fallback-applied", "1");
    }
    applied
}
