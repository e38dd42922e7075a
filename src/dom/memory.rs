use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{ids, Display, Page};

/// Recorded state of one element.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub display: Option<String>,
    pub text: String,
    pub attrs: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    /// HTML fragments in insertion order.
    pub children: Vec<String>,
    pub value: String,
    pub form: Option<String>,
    pub offset_top: f64,
}

#[derive(Debug, Default)]
struct State {
    elements: HashMap<String, Element>,
    body_overflow: String,
    header_height: f64,
    scroll_y: f64,
    opened: Vec<String>,
    notices: Vec<String>,
    deferred: Vec<String>,
}

/// A document that lives in memory. Supports the full [`Page`] surface so
/// the controllers can run headless.
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: RefCell<State>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every element the storefront markup normally provides.
    pub fn storefront() -> Self {
        let page = MemoryPage::new().with_header_height(80.0);
        for id in ids::STATIC {
            if ids::CONTACT_FIELDS.contains(id) {
                continue;
            }
            page.insert(id);
        }
        for id in ids::CONTACT_FIELDS {
            page.insert(id);
            page.update(id, |el| el.form = Some(ids::CONTACT_FORM.to_string()));
        }
        page.insert(ids::BODY);
        page
    }

    pub fn with_element(self, id: &str) -> Self {
        self.insert(id);
        self
    }

    pub fn without_element(self, id: &str) -> Self {
        self.state.borrow_mut().elements.remove(id);
        self
    }

    pub fn with_header_height(self, height: f64) -> Self {
        self.state.borrow_mut().header_height = height;
        self
    }

    pub fn with_offset(self, id: &str, top: f64) -> Self {
        self.insert(id);
        self.update(id, |el| el.offset_top = top);
        self
    }

    pub fn with_deferred_image(self, id: &str, src: &str) -> Self {
        self.insert(id);
        self.update(id, |el| {
            el.attrs.insert("data-src".to_string(), src.to_string());
        });
        self.state.borrow_mut().deferred.push(id.to_string());
        self
    }

    fn insert(&self, id: &str) {
        self.state
            .borrow_mut()
            .elements
            .entry(id.to_string())
            .or_default();
    }

    fn update(&self, id: &str, f: impl FnOnce(&mut Element)) -> bool {
        match self.state.borrow_mut().elements.get_mut(id) {
            Some(el) => {
                f(el);
                true
            }
            None => false,
        }
    }

    /// Type into a form control.
    pub fn set_field(&self, id: &str, value: &str) -> bool {
        self.update(id, |el| el.value = value.to_string())
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.state.borrow().elements.get(id).cloned()
    }

    pub fn display(&self, id: &str) -> Option<String> {
        self.element(id).and_then(|el| el.display)
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.text)
    }

    pub fn children(&self, id: &str) -> Vec<String> {
        self.element(id).map(|el| el.children).unwrap_or_default()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id)
            .map(|el| el.classes.contains(class))
            .unwrap_or(false)
    }

    pub fn body_overflow(&self) -> String {
        self.state.borrow().body_overflow.clone()
    }

    pub fn scroll_y(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    pub fn opened_windows(&self) -> Vec<String> {
        self.state.borrow().opened.clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.state.borrow().notices.clone()
    }
}

impl Page for MemoryPage {
    fn exists(&self, id: &str) -> bool {
        self.state.borrow().elements.contains_key(id)
    }

    fn set_display(&self, id: &str, display: Display) -> bool {
        self.update(id, |el| el.display = Some(display.as_css().to_string()))
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        self.update(id, |el| {
            el.text = text.to_string();
            el.children.clear();
        })
    }

    fn attr(&self, id: &str, name: &str) -> Option<String> {
        self.state
            .borrow()
            .elements
            .get(id)
            .and_then(|el| el.attrs.get(name).cloned())
    }

    fn set_attr(&self, id: &str, name: &str, value: &str) -> bool {
        self.update(id, |el| {
            el.attrs.insert(name.to_string(), value.to_string());
        })
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        self.update(id, |el| {
            el.text.clear();
            el.children.clear();
            if !html.is_empty() {
                el.children.push(html.to_string());
            }
        })
    }

    fn append_html(&self, id: &str, html: &str) -> bool {
        self.update(id, |el| el.children.push(html.to_string()))
    }

    fn add_class(&self, id: &str, class: &str) -> bool {
        self.update(id, |el| {
            el.classes.insert(class.to_string());
        })
    }

    fn remove_class(&self, id: &str, class: &str) -> bool {
        self.update(id, |el| {
            el.classes.remove(class);
        })
    }

    fn toggle_class(&self, id: &str, class: &str) -> bool {
        self.update(id, |el| {
            if !el.classes.remove(class) {
                el.classes.insert(class.to_string());
            }
        })
    }

    fn field_value(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.value)
    }

    fn reset_form(&self, id: &str) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.elements.contains_key(id) {
            return false;
        }
        for el in state.elements.values_mut() {
            if el.form.as_deref() == Some(id) {
                el.value.clear();
            }
        }
        true
    }

    fn set_body_overflow(&self, value: &str) {
        self.state.borrow_mut().body_overflow = value.to_string();
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.element(id).map(|el| el.offset_top)
    }

    fn header_height(&self) -> f64 {
        self.state.borrow().header_height
    }

    fn scroll_to(&self, top: f64) {
        self.state.borrow_mut().scroll_y = top;
    }

    fn open_window(&self, url: &str) {
        self.state.borrow_mut().opened.push(url.to_string());
    }

    fn notify(&self, message: &str) {
        self.state.borrow_mut().notices.push(message.to_string());
    }

    fn deferred_images(&self) -> Vec<String> {
        self.state.borrow().deferred.clone()
    }
}
