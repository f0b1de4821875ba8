//! The single-line address field.
//!
//! Holds whatever text is currently shown. Editing only stores text; turning
//! it into a URL happens on submission via `url_resolver::resolve`.

#[derive(Debug, Default, Clone)]
pub struct AddressBar {
    text: String,
}

impl AddressBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// User typing.
    pub fn edit(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Mirror a URL reported for the active tab.
    pub fn show_url(&mut self, url: &str) {
        self.text = url.to_string();
    }

    /// Text to resolve on submission.
    pub fn submission(&self) -> &str {
        self.text.trim()
    }
}
