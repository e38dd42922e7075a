//! Browser DOM backend and event wiring.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::Datelike;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry, ScrollBehavior,
    ScrollToOptions, Window,
};

use super::{ids, Display, Node, Page};
use crate::bootstrap::Outcome;
use crate::config::SiteConfig;
use crate::loader::HttpSource;
use crate::site::Site;

type WebSite = Site<WebPage, HttpSource>;

/// Live document, with the fixed elements resolved once up front.
pub struct WebPage {
    window: Window,
    document: Document,
    handles: HashMap<&'static str, Element>,
    next_lazy_id: Cell<usize>,
}

fn lookup(document: &Document, key: &str) -> Option<Element> {
    let selector = match key {
        ids::HEADER => "header",
        ids::MENU_TOGGLE => ".menu-toggle",
        ids::NAV_LINKS => ".nav-links",
        _ => return document.get_element_by_id(key),
    };
    document.query_selector(selector).ok().flatten()
}

impl WebPage {
    pub fn new(window: Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let mut handles = HashMap::new();
        for id in ids::STATIC {
            match lookup(&document, id) {
                Some(el) => {
                    handles.insert(*id, el);
                }
                None => log::debug!("[boot] #{} not on page", id),
            }
        }
        Ok(WebPage {
            window,
            document,
            handles,
            next_lazy_id: Cell::new(0),
        })
    }

    pub(crate) fn element(&self, id: &str) -> Option<Element> {
        if id == ids::BODY {
            return self.document.body().map(Into::into);
        }
        if let Some(el) = self.handles.get(id) {
            return Some(el.clone());
        }
        lookup(&self.document, id)
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }
}

impl Page for WebPage {
    fn exists(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn set_display(&self, id: &str, display: Display) -> bool {
        match self.html_element(id) {
            Some(el) => el
                .style()
                .set_property("display", display.as_css())
                .is_ok(),
            None => false,
        }
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        match self.element(id) {
            Some(el) => {
                el.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn attr(&self, id: &str, name: &str) -> Option<String> {
        self.element(id)?.get_attribute(name)
    }

    fn set_attr(&self, id: &str, name: &str, value: &str) -> bool {
        match self.element(id) {
            Some(el) => el.set_attribute(name, value).is_ok(),
            None => false,
        }
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        match self.element(id) {
            Some(el) => {
                el.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn append_html(&self, id: &str, html: &str) -> bool {
        match self.element(id) {
            Some(el) => el.insert_adjacent_html("beforeend", html).is_ok(),
            None => false,
        }
    }

    fn add_class(&self, id: &str, class: &str) -> bool {
        match self.element(id) {
            Some(el) => el.class_list().add_1(class).is_ok(),
            None => false,
        }
    }

    fn remove_class(&self, id: &str, class: &str) -> bool {
        match self.element(id) {
            Some(el) => el.class_list().remove_1(class).is_ok(),
            None => false,
        }
    }

    fn toggle_class(&self, id: &str, class: &str) -> bool {
        match self.element(id) {
            Some(el) => el.class_list().toggle(class).is_ok(),
            None => false,
        }
    }

    fn field_value(&self, id: &str) -> Option<String> {
        let el = self.element(id)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        el.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
    }

    fn reset_form(&self, id: &str) -> bool {
        match self
            .element(id)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            Some(form) => {
                form.reset();
                true
            }
            None => false,
        }
    }

    fn set_body_overflow(&self, value: &str) {
        if let Some(body) = self.document.body() {
            let _ = body.style().set_property("overflow", value);
        }
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.html_element(id).map(|el| el.offset_top() as f64)
    }

    fn header_height(&self) -> f64 {
        self.html_element(ids::HEADER)
            .map(|el| el.offset_height() as f64)
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn open_window(&self, url: &str) {
        if let Err(e) = self.window.open_with_url_and_target(url, "_blank") {
            log::warn!("[contact] window.open failed: {:?}", e);
        }
    }

    fn notify(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn deferred_images(&self) -> Vec<String> {
        let list = match self.document.query_selector_all("img[data-src]") {
            Ok(list) => list,
            Err(_) => return Vec::new(),
        };
        let mut found = Vec::new();
        for i in 0..list.length() {
            let el = match list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                Some(el) => el,
                None => continue,
            };
            if el.id().is_empty() {
                let n = self.next_lazy_id.get();
                self.next_lazy_id.set(n + 1);
                el.set_id(&format!("lazy-img-{}", n));
            }
            found.push(el.id());
        }
        found
    }
}

/// Target-first propagation path of an event.
fn event_path(event: &Event) -> Vec<Node> {
    let mut path = Vec::new();
    let mut current = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok());
    while let Some(el) = current {
        let mut node = Node::new(&el.tag_name());
        let id = el.id();
        if !id.is_empty() {
            node = node.with_id(&id);
        }
        for class in el.class_name().split_whitespace() {
            node = node.with_class(class);
        }
        for name in ["href", "data-index", "data-id"] {
            if let Some(value) = el.get_attribute(name) {
                node = node.with_attr(name, &value);
            }
        }
        path.push(node);
        current = el.parent_element();
    }
    path
}

fn reload(site: &Rc<WebSite>, outcome: Outcome) {
    if let Outcome::Reload(panel) = outcome {
        let site = site.clone();
        spawn_local(async move {
            site.load_panel(panel).await;
        });
    }
}

/// Every listener is attached exactly once, here.
fn attach_listeners(site: &Rc<WebSite>, window: &Window, document: &Document) -> Result<(), JsValue> {
    // Delegated clicks: nav, retry, modal, cards, anchors
    {
        let st = site.clone();
        let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            let outcome = st.handle_click(&event_path(&e));
            if outcome == Outcome::Prevent {
                e.prevent_default();
            }
            reload(&st, outcome);
        }));
        document.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Contact form
    if let Some(form) = site.page().element(ids::CONTACT_FORM) {
        let st = site.clone();
        let onsubmit = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            if st.submit_contact() == Outcome::Prevent {
                e.prevent_default();
            }
        }));
        form.add_event_listener_with_callback("submit", onsubmit.as_ref().unchecked_ref())?;
        onsubmit.forget();
    }

    // Close the mobile menu when the viewport grows past the breakpoint
    {
        let st = site.clone();
        let win = window.clone();
        let onresize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let width = win
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            st.handle_resize(width);
        }));
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    // Image load errors don't bubble, so listen in the capture phase
    {
        let st = site.clone();
        let onerror = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            if let Some(img) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                if img.tag_name().eq_ignore_ascii_case("img") && !img.id().is_empty() {
                    st.handle_image_error(&img.id());
                }
            }
        }));
        document.add_event_listener_with_callback_and_bool(
            "error",
            onerror.as_ref().unchecked_ref(),
            true,
        )?;
        onerror.forget();
    }

    // Deferred images
    {
        let st = site.clone();
        let onintersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::wrap(
            Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if st.handle_visibility(&target.id(), entry.is_intersecting()) {
                        observer.unobserve(&target);
                    }
                }
            }),
        );
        match IntersectionObserver::new(onintersect.as_ref().unchecked_ref()) {
            Ok(observer) => {
                for id in site.pending_images() {
                    if let Some(el) = site.page().element(&id) {
                        observer.observe(&el);
                    }
                }
                onintersect.forget();
            }
            Err(e) => log::warn!("[lazy] IntersectionObserver unavailable: {:?}", e),
        }
    }

    Ok(())
}

fn boot(window: Window) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let inline = document
        .get_element_by_id(ids::SITE_CONFIG)
        .and_then(|el| el.text_content());
    let config = SiteConfig::resolve(inline.as_deref());
    let page = WebPage::new(window.clone())?;
    let site = Rc::new(Site::new(config, page, HttpSource::new()));

    site.init(chrono::Local::now().year());
    attach_listeners(&site, &window, &document)?;

    let loading = site.clone();
    spawn_local(async move {
        loading.load_all().await;
    });
    Ok(())
}

/// Entry point. Waits for the document's structure to be parsed before
/// resolving any element.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let win = window.clone();
        let onready = Closure::once_into_js(move || {
            if let Err(e) = boot(win) {
                log::error!("[boot] failed: {:?}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", onready.unchecked_ref())?;
        Ok(())
    } else {
        boot(window)
    }
}
