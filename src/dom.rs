//! The slice of the document the storefront script touches.
//!
//! Everything the rest of the crate does to the page goes through [`Page`],
//! keyed by the names in [`ids`]. The browser implementation lives in `web`;
//! `memory` backs headless rendering and the test suite.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Keys of the fixed elements the page markup provides. Most are element
/// ids; the header and the two nav parts are located by selector instead.
pub mod ids {
    pub const BODY: &str = "body";
    pub const HEADER: &str = "header";

    /// `.menu-toggle`
    pub const MENU_TOGGLE: &str = "menu-toggle";
    /// `.nav-links`
    pub const NAV_LINKS: &str = "nav-links";

    pub const MODAL: &str = "designModal";
    pub const MODAL_TITLE: &str = "modalTitle";
    pub const MODAL_IMAGE: &str = "modalImage";
    pub const MODAL_DESCRIPTION: &str = "modalDescription";
    pub const MODAL_CATEGORY: &str = "modalCategory";
    pub const MODAL_DATE: &str = "modalDate";
    pub const WHATSAPP_LINK: &str = "whatsappLink";
    pub const EMAIL_LINK: &str = "emailLink";
    pub const BACK_TO_GALLERY: &str = "backToGallery";

    pub const GALLERY_LOADING: &str = "galleryLoading";
    pub const GALLERY_ERROR: &str = "galleryError";
    pub const GALLERY_EMPTY: &str = "galleryEmpty";
    pub const GALLERY_CONTAINER: &str = "designGallery";
    pub const RETRY_GALLERY: &str = "retryLoadGallery";

    pub const VIDEOS_LOADING: &str = "videosLoading";
    pub const VIDEOS_ERROR: &str = "videosError";
    pub const VIDEOS_EMPTY: &str = "videosEmpty";
    pub const VIDEOS_GRID: &str = "videosGrid";
    pub const RETRY_VIDEOS: &str = "retryLoadVideos";

    pub const LAST_UPDATED: &str = "lastUpdatedDate";
    pub const CURRENT_YEAR: &str = "currentYear";

    pub const CONTACT_FORM: &str = "contactForm";
    pub const CONTACT_NAME: &str = "name";
    pub const CONTACT_EMAIL: &str = "email";
    pub const CONTACT_PHONE: &str = "phone";
    pub const CONTACT_MESSAGE: &str = "message";

    /// Optional inline TOML block overriding the built-in site settings.
    pub const SITE_CONFIG: &str = "siteConfig";

    /// Ids resolved once when the page handle is built.
    pub const STATIC: &[&str] = &[
        HEADER,
        MENU_TOGGLE,
        NAV_LINKS,
        MODAL,
        MODAL_TITLE,
        MODAL_IMAGE,
        MODAL_DESCRIPTION,
        MODAL_CATEGORY,
        MODAL_DATE,
        WHATSAPP_LINK,
        EMAIL_LINK,
        BACK_TO_GALLERY,
        GALLERY_LOADING,
        GALLERY_ERROR,
        GALLERY_EMPTY,
        GALLERY_CONTAINER,
        RETRY_GALLERY,
        VIDEOS_LOADING,
        VIDEOS_ERROR,
        VIDEOS_EMPTY,
        VIDEOS_GRID,
        RETRY_VIDEOS,
        LAST_UPDATED,
        CURRENT_YEAR,
        CONTACT_FORM,
        CONTACT_NAME,
        CONTACT_EMAIL,
        CONTACT_PHONE,
        CONTACT_MESSAGE,
    ];

    pub const CONTACT_FIELDS: &[&str] = &[CONTACT_NAME, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_MESSAGE];
}

/// Class names the renderer emits and the click dispatcher recognises.
pub mod classes {
    pub const MENU_TOGGLE: &str = "menu-toggle";
    pub const NAV_LINKS: &str = "nav-links";
    pub const ACTIVE: &str = "active";
    pub const LOADED: &str = "loaded";
    pub const CLOSE_BTN: &str = "close-btn";
    pub const DESIGN_CARD: &str = "design-card";
    pub const DESIGN_IMG: &str = "design-img";
    pub const VIDEO_CARD: &str = "video-card";
    pub const WHATSAPP_BTN: &str = "design-whatsapp-btn";
    pub const QUICK_WHATSAPP: &str = "design-quick-whatsapp";
    pub const WHATSAPP_CTA: &str = "whatsapp-cta";
}

/// CSS `display` values the controllers switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Grid,
    Flex,
    InlineBlock,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Grid => "grid",
            Display::Flex => "flex",
            Display::InlineBlock => "inline-block",
        }
    }
}

/// One element on a click's propagation path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Node {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn is(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Everything the controllers need from the document.
///
/// Mutators return `false` when the element is not on the page; callers
/// treat that as a no-op, never as a failure.
pub trait Page {
    fn exists(&self, id: &str) -> bool;
    fn set_display(&self, id: &str, display: Display) -> bool;
    fn set_text(&self, id: &str, text: &str) -> bool;
    fn attr(&self, id: &str, name: &str) -> Option<String>;
    fn set_attr(&self, id: &str, name: &str, value: &str) -> bool;
    fn set_inner_html(&self, id: &str, html: &str) -> bool;
    fn append_html(&self, id: &str, html: &str) -> bool;
    fn add_class(&self, id: &str, class: &str) -> bool;
    fn remove_class(&self, id: &str, class: &str) -> bool;
    fn toggle_class(&self, id: &str, class: &str) -> bool;

    /// Current value of a form control.
    fn field_value(&self, id: &str) -> Option<String>;
    fn reset_form(&self, id: &str) -> bool;

    fn set_body_overflow(&self, value: &str);
    /// Distance from the top of the document, in CSS pixels.
    fn offset_top(&self, id: &str) -> Option<f64>;
    fn header_height(&self) -> f64;
    fn scroll_to(&self, top: f64);

    /// Open a URL in a new browsing context.
    fn open_window(&self, url: &str);
    /// Show a blocking confirmation notice to the visitor.
    fn notify(&self, message: &str);

    /// Ids of images that carry a deferred `data-src`. Implementations
    /// assign ids to such images when the markup did not.
    fn deferred_images(&self) -> Vec<String>;
}
