//! HTML fragments for gallery and video cards.

use crate::config::SiteConfig;
use crate::dom::classes;
use crate::links;
use crate::models::design::Design;
use crate::models::video::Video;
use crate::youtube;

pub const DESCRIPTION_LIMIT: usize = 100;
pub const IMAGE_UNAVAILABLE_ALT: &str = "Image not available";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Cut to `DESCRIPTION_LIMIT` characters, adding `...` only when something was cut.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_LIMIT {
        return text.to_string();
    }
    let mut result: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    result.push_str("...");
    result
}

/// Id of the `<img>` inside the design card at `index`.
pub fn design_image_id(index: usize) -> String {
    format!("design-img-{}", index)
}

fn badge(class: &str, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("<span class=\"{}\">{}</span>", class, html_escape(v)),
        None => String::new(),
    }
}

pub fn design_card(config: &SiteConfig, design: &Design, index: usize) -> String {
    let whatsapp = html_escape(&links::design_whatsapp_url(config, design));
    let title = html_escape(&design.title);
    let description = html_escape(&truncate_description(
        design.description.as_deref().unwrap_or(""),
    ));

    format!(
        r#"<div class="{card}" data-id="{data_id}" data-index="{index}">
    <div class="design-img-container">
        <img id="{img_id}" src="{image}" alt="{title}" class="{img}" loading="lazy" data-fallback="{fallback}">
        <div class="design-overlay">
            <a href="{whatsapp}" class="{btn}" target="_blank" rel="noopener" title="Inquire about this design on WhatsApp"><i class="fab fa-whatsapp"></i> Inquire Now</a>
        </div>
    </div>
    <div class="design-info">
        <h3>{title}</h3>
        <p>{description}</p>
        {category}{date}
        <a href="{whatsapp}" class="btn {quick}" target="_blank" rel="noopener"><i class="fab fa-whatsapp"></i> WhatsApp Inquiry</a>
    </div>
</div>"#,
        card = classes::DESIGN_CARD,
        data_id = html_escape(&design.display_id(index)),
        index = index,
        img_id = design_image_id(index),
        image = html_escape(&design.image),
        title = title,
        img = classes::DESIGN_IMG,
        fallback = html_escape(&config.placeholder_image),
        whatsapp = whatsapp,
        btn = classes::WHATSAPP_BTN,
        description = description,
        category = badge("design-category", design.category()),
        date = badge("design-date", design.date()),
        quick = classes::QUICK_WHATSAPP,
    )
}

pub fn video_card(video: &Video, index: usize) -> String {
    let embed = match video.youtube_id() {
        Some(id) => format!(
            r#"<div class="video-container">
        <iframe src="{}" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen loading="lazy"></iframe>
    </div>"#,
            html_escape(&youtube::embed_url(&id))
        ),
        None => r#"<div class="video-container">
        <div class="video-unavailable" style="display:flex;align-items:center;justify-content:center;height:100%;background:#000;color:#fff"><p>Video unavailable</p></div>
    </div>"#
            .to_string(),
    };

    format!(
        r#"<div class="{card}" data-id="{data_id}">
    {embed}
    <div class="video-info">
        <h3>{title}</h3>
        <p>{description}</p>
        {date}
    </div>
</div>"#,
        card = classes::VIDEO_CARD,
        data_id = html_escape(&video.display_id(index)),
        embed = embed,
        title = html_escape(video.title()),
        description = html_escape(video.description()),
        date = badge("design-date", video.date()),
    )
}

/// Floating "chat with us" button appended to the page body.
pub fn whatsapp_cta(config: &SiteConfig) -> String {
    format!(
        r#"<a href="{}" class="{}" target="_blank" rel="noopener" title="Chat with us on WhatsApp"><i class="fab fa-whatsapp"></i></a>"#,
        html_escape(&links::whatsapp_url(
            &config.whatsapp_number,
            &links::greeting_message(config)
        )),
        classes::WHATSAPP_CTA
    )
}
