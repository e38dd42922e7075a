use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_BUSINESS_NAME: &str = "Pure Pleasure Building and Interior Concept";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "+2348165262854";
pub const DEFAULT_BUSINESS_EMAIL: &str = "Abrahamuwaoma71@gmail.com";
pub const DEFAULT_GALLERY_URL: &str =
    "https://raw.githubusercontent.com/AdieleSolomon/Image-Gallery/main/gallery.json";
pub const DEFAULT_VIDEOS_URL: &str =
    "https://raw.githubusercontent.com/AdieleSolomon/Image-Gallery/main/videos.json";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1615529328331-f8917597711f?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80";

/// Business identity and data endpoints for one storefront.
///
/// Every key is optional when loaded from TOML; missing keys keep the
/// built-in values.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub business_name: String,
    pub whatsapp_number: String,
    pub business_email: String,
    pub gallery_url: String,
    pub videos_url: String,
    pub placeholder_image: String,
    /// Widths above this close the mobile nav on resize.
    pub mobile_breakpoint: f64,
    pub last_updated_placeholder: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            business_email: DEFAULT_BUSINESS_EMAIL.to_string(),
            gallery_url: DEFAULT_GALLERY_URL.to_string(),
            videos_url: DEFAULT_VIDEOS_URL.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            mobile_breakpoint: 767.0,
            last_updated_placeholder: "Recently".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML override on top of the defaults and validate it.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            toml::from_str(raw).map_err(|e| ConfigError(format!("Invalid site config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Settings for a page: the inline TOML override when one is present and
    /// valid, the built-in values otherwise.
    pub fn resolve(inline: Option<&str>) -> Self {
        let raw = match inline.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw,
            None => return SiteConfig::default(),
        };
        match SiteConfig::from_toml_str(raw) {
            Ok(config) => {
                log::info!("[boot] using inline site config for {}", config.business_name);
                config
            }
            Err(e) => {
                log::error!("[boot] {}; keeping built-in settings", e);
                SiteConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("gallery_url", &self.gallery_url),
            ("videos_url", &self.videos_url),
        ] {
            let parsed = url::Url::parse(value)
                .map_err(|e| ConfigError(format!("{} is not a valid URL: {}", key, e)))?;
            if parsed.scheme() != "https" && parsed.scheme() != "http" {
                return Err(ConfigError(format!(
                    "{} must be an http(s) URL, got scheme '{}'",
                    key,
                    parsed.scheme()
                )));
            }
        }
        if !self.whatsapp_number.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError("whatsapp_number has no digits".into()));
        }
        Ok(())
    }
}
