//! Per-page alignment guide storage and screen-space projection.

use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Guide lines registered for a single page, in document units.
///
/// Guides are advisory only: the interaction surface consumes the projected
/// positions for snap feedback, but nothing here mutates elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideSet {
    /// Horizontal line offsets (distance from the page top), in order.
    pub horizontal: Vec<f64>,
    /// Vertical line offsets (distance from the page left), in order.
    pub vertical: Vec<f64>,
}

impl GuideSet {
    /// Create an empty guide set.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Stores guide sets keyed by page index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideStore {
    pages: HashMap<usize, GuideSet>,
}

impl GuideStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the guide set for a page.
    pub fn register_page(&mut self, page: usize, guides: GuideSet) {
        self.pages.insert(page, guides);
    }

    /// Add a horizontal guide to a page, registering the page if needed.
    pub fn add_horizontal(&mut self, page: usize, offset: f64) {
        self.pages.entry(page).or_default().horizontal.push(offset);
    }

    /// Add a vertical guide to a page, registering the page if needed.
    pub fn add_vertical(&mut self, page: usize, offset: f64) {
        self.pages.entry(page).or_default().vertical.push(offset);
    }

    /// Get the guide set for a page, if one has been registered.
    pub fn page(&self, page: usize) -> Option<&GuideSet> {
        self.pages.get(&page)
    }

    /// Horizontal guide lines for a page, projected to screen space.
    ///
    /// Pages without a registered guide source yield an empty list.
    pub fn horizontal_lines(&self, page: usize, viewport: &Viewport) -> Vec<f64> {
        self.pages
            .get(&page)
            .map(|g| g.horizontal.iter().map(|&o| viewport.project(o)).collect())
            .unwrap_or_default()
    }

    /// Vertical guide lines for a page, projected to screen space.
    pub fn vertical_lines(&self, page: usize, viewport: &Viewport) -> Vec<f64> {
        self.pages
            .get(&page)
            .map(|g| g.vertical.iter().map(|&o| viewport.project(o)).collect())
            .unwrap_or_default()
    }
}
