//! One-time page setup and the event handlers wired to it.

use crate::dom::{classes, ids, Node, Page};
use crate::links::{self, ContactInquiry};
use crate::loader::JsonSource;
use crate::modal::{self, ModalState};
use crate::render;
use crate::site::Site;
use crate::ui_state::Panel;

pub const CONTACT_CONFIRMATION: &str =
    "Thank you for your message! You will be redirected to WhatsApp to send your inquiry.";

/// What the browser should do with the event after the site handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Let the default action (link navigation etc.) run.
    Default,
    /// Call `preventDefault()`.
    Prevent,
    /// Let the default action run and reload this panel.
    Reload(Panel),
}

impl<P: Page, S: JsonSource> Site<P, S> {
    /// Footer year, floating WhatsApp button, deferred images. Runs once;
    /// later calls are no-ops so nothing is ever attached twice.
    pub fn init(&self, year: i32) {
        if self.initialized.replace(true) {
            log::debug!("[boot] already initialized");
            return;
        }

        self.page.set_text(ids::CURRENT_YEAR, &year.to_string());

        if !self
            .page
            .append_html(ids::BODY, &render::whatsapp_cta(&self.config))
        {
            log::warn!("[boot] no body to attach the WhatsApp button to");
        }

        let deferred = self.page.deferred_images();
        let mut lazy = self.lazy.borrow_mut();
        for id in &deferred {
            lazy.observe(id);
        }
        log::info!("[boot] initialized, {} deferred images", deferred.len());
    }

    /// Single delegated click handler. `path` runs from the clicked element
    /// up to the document root.
    pub fn handle_click(&self, path: &[Node]) -> Outcome {
        self.handle_nav_click(path);

        for panel in [Panel::Gallery, Panel::Videos] {
            if path.iter().any(|n| n.is(panel.retry_button())) {
                log::info!("[{}] retry requested", panel.name());
                return Outcome::Reload(panel);
            }
        }

        if self.modal.get() != ModalState::Closed {
            let on_backdrop = path.first().map(|n| n.is(ids::MODAL)).unwrap_or(false);
            let on_close = path
                .iter()
                .any(|n| n.has_class(classes::CLOSE_BTN) || n.is(ids::BACK_TO_GALLERY));
            if on_backdrop || on_close {
                self.close_modal();
                return self.follow_anchor(path).unwrap_or(Outcome::Default);
            }
            if path.iter().any(|n| n.is(ids::MODAL)) {
                // Inside the content area: never reaches the backdrop handler.
                return Outcome::Default;
            }
        }

        let on_whatsapp = path
            .iter()
            .any(|n| n.has_class(classes::WHATSAPP_BTN) || n.has_class(classes::QUICK_WHATSAPP));
        if !on_whatsapp {
            if let Some(index) = path
                .iter()
                .find(|n| n.has_class(classes::DESIGN_CARD))
                .and_then(|card| card.attr("data-index"))
                .and_then(|v| v.parse::<usize>().ok())
            {
                self.open_design(index);
                return Outcome::Default;
            }
        }

        self.follow_anchor(path).unwrap_or(Outcome::Default)
    }

    /// Smooth-scroll for in-page `#anchor` links.
    fn follow_anchor(&self, path: &[Node]) -> Option<Outcome> {
        let href = path
            .iter()
            .find(|n| n.tag == "a")
            .and_then(|a| a.attr("href"))?;
        if !href.starts_with('#') {
            return None;
        }
        self.scroll_to_anchor(href);
        Some(Outcome::Prevent)
    }

    fn handle_nav_click(&self, path: &[Node]) {
        if path.iter().any(|n| n.has_class(classes::MENU_TOGGLE)) {
            self.page.toggle_class(ids::NAV_LINKS, classes::ACTIVE);
            return;
        }
        match path.iter().position(|n| n.has_class(classes::NAV_LINKS)) {
            // A link inside the menu closes it; other clicks inside leave it alone.
            Some(nav_at) => {
                if path[..nav_at].iter().any(|n| n.tag == "a") {
                    self.page.remove_class(ids::NAV_LINKS, classes::ACTIVE);
                }
            }
            None => {
                self.page.remove_class(ids::NAV_LINKS, classes::ACTIVE);
            }
        }
    }

    fn scroll_to_anchor(&self, href: &str) {
        let target = &href[1..];
        if target.is_empty() {
            return;
        }
        match self.page.offset_top(target) {
            Some(top) => self.page.scroll_to(top - self.page.header_height()),
            None => log::debug!("[nav] anchor target #{} not on page", target),
        }
    }

    /// Show the detail overlay for the design at `index`.
    pub fn open_design(&self, index: usize) -> bool {
        let design = match self.designs.borrow().get(index) {
            Some(d) => d.clone(),
            None => {
                log::warn!("[modal] no design at index {}", index);
                return false;
            }
        };
        if !modal::open(&self.page, &self.config, &design) {
            return false;
        }
        self.modal.set(ModalState::Open(index));
        true
    }

    pub fn close_modal(&self) {
        modal::close(&self.page);
        self.modal.set(ModalState::Closed);
    }

    /// Contact form submission: hand the inquiry to WhatsApp instead of posting the form.
    pub fn submit_contact(&self) -> Outcome {
        let field = |id: &str| self.page.field_value(id).unwrap_or_default();
        let inquiry = ContactInquiry {
            name: field(ids::CONTACT_NAME),
            email: field(ids::CONTACT_EMAIL),
            phone: field(ids::CONTACT_PHONE),
            message: field(ids::CONTACT_MESSAGE),
        };
        let message = links::contact_message(&self.config, &inquiry);
        self.page
            .open_window(&links::whatsapp_url(&self.config.whatsapp_number, &message));
        self.page.notify(CONTACT_CONFIRMATION);
        self.page.reset_form(ids::CONTACT_FORM);
        log::info!("[contact] inquiry handed to WhatsApp");
        Outcome::Prevent
    }

    pub fn handle_resize(&self, width: f64) {
        if width > self.config.mobile_breakpoint {
            self.page.remove_class(ids::NAV_LINKS, classes::ACTIVE);
        }
    }

    /// An `<img>` failed to load. Card and modal images get the placeholder.
    pub fn handle_image_error(&self, image_id: &str) -> bool {
        let is_ours = image_id == ids::MODAL_IMAGE || image_id.starts_with("design-img-");
        is_ours && modal::apply_image_fallback(&self.page, &self.config, image_id)
    }

    /// Deferred images still waiting to be shown.
    pub fn pending_images(&self) -> Vec<String> {
        self.lazy.borrow().pending()
    }

    /// Viewport intersection report for a deferred image. Returns `true`
    /// when the caller should stop observing it.
    pub fn handle_visibility(&self, image_id: &str, visible: bool) -> bool {
        self.lazy
            .borrow_mut()
            .on_visible(&self.page, image_id, visible)
    }
}
