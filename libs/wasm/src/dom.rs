//! # DOM Surfaces
//!
//! The status line and the two request-source controls, as the pipeline's
//! sink and gate traits over plain DOM elements.

use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use step_pipeline::{SourceGate, StatusSink};

/// Writes status text into one DOM element.
pub struct DomStatusSink {
    element: Element,
}

impl DomStatusSink {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl StatusSink for DomStatusSink {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// Toggles the `disabled` attribute on the upload input and the catalog
/// selector.
pub struct DomSourceGate {
    file_input: HtmlInputElement,
    catalog_select: HtmlSelectElement,
}

impl DomSourceGate {
    pub fn new(file_input: HtmlInputElement, catalog_select: HtmlSelectElement) -> Self {
        Self {
            file_input,
            catalog_select,
        }
    }
}

impl SourceGate for DomSourceGate {
    fn set_upload_enabled(&mut self, enabled: bool) {
        self.file_input.set_disabled(!enabled);
    }

    fn set_catalog_enabled(&mut self, enabled: bool) {
        self.catalog_select.set_disabled(!enabled);
    }
}
