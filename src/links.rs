//! Outbound deep links (WhatsApp chat, e-mail compose) and the inquiry
//! messages that go into them.

use crate::config::SiteConfig;
use crate::models::design::Design;

pub const DEFAULT_CATEGORY: &str = "Interior Design";
const NO_DESCRIPTION: &str = "No description available";
const NOT_PROVIDED: &str = "Not provided";
const NO_MESSAGE: &str = "No message provided";

/// Percent-encode the way browsers' `encodeURIComponent` does: everything
/// except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped as UTF-8 bytes.
pub fn encode_uri_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => result.push(b as char),
            _ => result.push_str(&format!("%{:02X}", b)),
        }
    }
    result
}

/// `https://wa.me/<digits>?text=<encoded message>`.
/// wa.me wants the bare international number, so `+`, spaces and dashes are dropped.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, encode_uri_component(message))
}

pub fn mailto(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        encode_uri_component(subject),
        encode_uri_component(body)
    )
}

pub fn greeting_message(config: &SiteConfig) -> String {
    format!(
        "Hello {}! I would like to inquire about your services.",
        config.business_name
    )
}

pub fn design_inquiry_message(config: &SiteConfig, design: &Design) -> String {
    format!(
        "Hello {biz}!\n\nI'm interested in your \"{title}\" design.\n\nDesign Details:\n• Title: {title}\n• Category: {category}\n\nPlease send me more information about this design, pricing details, and portfolio.",
        biz = config.business_name,
        title = design.title,
        category = design.category_or_default(),
    )
}

pub fn design_whatsapp_url(config: &SiteConfig, design: &Design) -> String {
    whatsapp_url(
        &config.whatsapp_number,
        &design_inquiry_message(config, design),
    )
}

pub fn design_email_subject(config: &SiteConfig, design: &Design) -> String {
    format!("Inquiry about {} Design - {}", design.title, config.business_name)
}

pub fn design_email_body(config: &SiteConfig, design: &Design) -> String {
    let description = design
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION);
    format!(
        "Hello {biz} Team,\n\nI'm interested in your \"{title}\" design.\n\nDesign Details:\n• Title: {title}\n• Category: {category}\n• Description: {description}\n\nPlease provide me with more information about:\n1. Detailed specifications\n2. Pricing information\n3. Timeline for completion\n4. Any similar projects you've done\n\nThank you for your assistance.\n\nBest regards,\n[Your Name]",
        biz = config.business_name,
        title = design.title,
        category = design.category_or_default(),
        description = description,
    )
}

pub fn design_mailto(config: &SiteConfig, design: &Design) -> String {
    mailto(
        &config.business_email,
        &design_email_subject(config, design),
        &design_email_body(config, design),
    )
}

/// Values typed into the contact form. Blank fields are treated as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

pub fn contact_message(config: &SiteConfig, inquiry: &ContactInquiry) -> String {
    format!(
        "Hello {biz}!\n\nNew Contact Inquiry:\n\n• Name: {name}\n• Email: {email}\n• Phone: {phone}\n• Message: {message}\n\nThis inquiry was submitted through your website.",
        biz = config.business_name,
        name = or_default(&inquiry.name, NOT_PROVIDED),
        email = or_default(&inquiry.email, NOT_PROVIDED),
        phone = or_default(&inquiry.phone, NOT_PROVIDED),
        message = or_default(&inquiry.message, NO_MESSAGE),
    )
}
