//! Page-level handles resolved once at startup.
//!
//! Feature initializers receive a [`PageContext`] instead of reaching for the
//! ambient globals themselves, so each controller can be exercised against a
//! fixture document in tests.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Storage, Window};

/// The window, document and (when available) local storage of the page the
/// module was loaded into.
#[derive(Clone)]
pub struct PageContext {
    window: Window,
    document: Document,
    storage: Option<Storage>,
}

impl PageContext {
    /// Resolves the global handles. Returns `None` outside a window context;
    /// storage access failures (e.g. privacy mode) leave `storage` empty
    /// rather than failing attachment.
    pub fn attach() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let storage = window.local_storage().ok().flatten();
        Some(Self {
            window,
            document,
            storage,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn storage(&self) -> Option<&Storage> {
        self.storage.as_ref()
    }

    /// First element matching `selector`, if any.
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// Element with the given id, cast to the requested interface.
    pub fn by_id<T>(&self, id: &str) -> Option<T>
    where
        T: JsCast,
    {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<T>().ok())
    }
}
