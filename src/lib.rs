//! Storefront script for a small interior design business: gallery and
//! video panels fed from published JSON, a design detail overlay, and
//! WhatsApp / e-mail inquiry links.

pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod error;
pub mod lazy;
pub mod links;
pub mod loader;
pub mod modal;
pub mod models;
pub mod render;
pub mod site;
pub mod ui_state;
pub mod youtube;


pub use bootstrap::Outcome;
pub use config::SiteConfig;
pub use dom::memory::MemoryPage;
pub use dom::{Node, Page};
pub use error::{ConfigError, LoadError};
pub use loader::{HttpSource, JsonSource};
pub use site::Site;
pub use ui_state::{Panel, PanelState};
