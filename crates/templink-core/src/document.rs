//! Template document: pages and the positioned elements they contain.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A positioned element on a page (one schema field of the template).
///
/// Position and size are logical document units. During a gesture the
/// on-screen frame is mutated transiently by the manipulation session;
/// the element itself only changes when the gesture's commit is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier; identity is by id.
    pub id: String,
    /// Top-left corner in document units (never negative).
    pub position: Point,
    /// Size in document units (never negative).
    pub size: Size,
    /// Index of the owning page.
    pub page: usize,
    /// Field content rendered by the schema widgets.
    #[serde(default)]
    pub data: String,
}

impl Element {
    /// Create an element with a fresh UUID id.
    pub fn new(position: Point, size: Size, page: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            position,
            size,
            page,
            data: String::new(),
        }
    }

    /// Create an element with a caller-supplied id.
    pub fn with_id(id: impl Into<String>, position: Point, size: Size, page: usize) -> Self {
        Self {
            id: id.into(),
            position,
            size,
            page,
            data: String::new(),
        }
    }

    /// Set the x coordinate, clamping negatives to 0.
    pub fn set_x(&mut self, x: f64) {
        self.position.x = x.max(0.0);
    }

    /// Set the y coordinate, clamping negatives to 0.
    pub fn set_y(&mut self, y: f64) {
        self.position.y = y.max(0.0);
    }

    /// Set the width, clamping negatives to 0.
    pub fn set_width(&mut self, width: f64) {
        self.size.width = width.max(0.0);
    }

    /// Set the height, clamping negatives to 0.
    pub fn set_height(&mut self, height: f64) {
        self.size.height = height.max(0.0);
    }
}

/// A single page of the template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page size in document units.
    pub size: Size,
    /// Opaque reference to the page background supplied by the renderer.
    #[serde(default)]
    pub background: Option<String>,
    /// Elements on this page, in z-order.
    pub elements: Vec<Element>,
}

impl Page {
    /// Create an empty page of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
            elements: Vec::new(),
        }
    }
}

/// The template document: an ordered sequence of pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateDocument {
    /// Pages in order.
    pub pages: Vec<Page>,
    /// Index of the page currently shown for interaction.
    pub page_cursor: usize,
}

impl TemplateDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page and return its index.
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// The page the cursor points at, if any.
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.page_cursor)
    }

    /// Add an element to its owning page. Ignored if the page is missing.
    pub fn add_element(&mut self, element: Element) {
        if let Some(page) = self.pages.get_mut(element.page) {
            page.elements.push(element);
        } else {
            log::warn!(
                "dropping element {} for missing page {}",
                element.id,
                element.page
            );
        }
    }

    /// Look up an element by id across all pages.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.pages
            .iter()
            .flat_map(|p| p.elements.iter())
            .find(|e| e.id == id)
    }

    /// Mutable lookup by id across all pages.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.pages
            .iter_mut()
            .flat_map(|p| p.elements.iter_mut())
            .find(|e| e.id == id)
    }

    /// Remove an element by id, returning it if found.
    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        for page in &mut self.pages {
            if let Some(pos) = page.elements.iter().position(|e| e.id == id) {
                return Some(page.elements.remove(pos));
            }
        }
        None
    }

    /// Ids of the elements on the current page, in z-order.
    pub fn current_page_element_ids(&self) -> Vec<String> {
        self.current_page()
            .map(|p| p.elements.iter().map(|e| e.id.clone()).collect())
            .unwrap_or_default()
    }
}
