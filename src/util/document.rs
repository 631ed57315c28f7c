//! Theme surfaces: the live document and an in-memory stand-in.
//!
//! The live surface writes the root element attribute and the toggle
//! control's `textContent`. Requires a browser environment; outside hydrate
//! builds it reports an unset attribute and no control.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::controller::ThemeSurface;
use crate::error::ThemeError;

/// `window.document` and its root element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

#[cfg(feature = "hydrate")]
fn document() -> Result<web_sys::Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ThemeError::DocumentUnavailable)
}

#[cfg(feature = "hydrate")]
fn root_element() -> Result<web_sys::Element, ThemeError> {
    document()?.document_element().ok_or(ThemeError::DocumentUnavailable)
}

impl ThemeSurface for DocumentSurface {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            Ok(root_element()?.get_attribute(name))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            root_element()?
                .set_attribute(name, value)
                .map_err(|e| ThemeError::Dom(super::js_error_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn set_control_label(&self, id: &str, label: &str) -> Result<bool, ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            match document()?.get_element_by_id(id) {
                Some(control) => {
                    control.set_text_content(Some(label));
                    Ok(true)
                }
                None => Ok(false),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(false)
        }
    }
}

#[derive(Debug, Default)]
struct MemoryPage {
    attributes: HashMap<String, String>,
    /// `None` when the page has no toggle control.
    control_label: Option<String>,
}

/// In-memory page. Clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    page: Rc<RefCell<MemoryPage>>,
}

impl MemorySurface {
    /// Page without a toggle control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with an empty toggle control.
    pub fn with_control() -> Self {
        let surface = Self::new();
        surface.page.borrow_mut().control_label = Some(String::new());
        surface
    }

    /// Seed a root attribute, as server-rendered markup would.
    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.page
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn attribute_value(&self, name: &str) -> Option<String> {
        self.page.borrow().attributes.get(name).cloned()
    }

    pub fn control_label(&self) -> Option<String> {
        self.page.borrow().control_label.clone()
    }

    pub fn has_control(&self) -> bool {
        self.page.borrow().control_label.is_some()
    }
}

impl ThemeSurface for MemorySurface {
    fn attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.attribute_value(name))
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.page
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_control_label(&self, _id: &str, label: &str) -> Result<bool, ThemeError> {
        let mut page = self.page.borrow_mut();
        match page.control_label.as_mut() {
            Some(current) => {
                label.clone_into(current);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
