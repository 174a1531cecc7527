//! Active selection, editing and hover state for canvas elements.

/// Tracks which elements are active and which one (if any) is being edited.
///
/// Selection order is preserved: it is the tie-break order used for group
/// anchors and commit batches. UI concerns (selection, editing, hover) stay
/// separate from the element data itself.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Active element ids, in selection order, without duplicates.
    active: Vec<String>,
    /// The element currently in editing mode. Always a member of `active`.
    editing: Option<String>,
    /// The element currently under the pointer.
    hovered: Option<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active set. Duplicates are dropped, order is kept.
    /// If the editing element is no longer a member, editing ends.
    pub fn set_active(&mut self, ids: Vec<String>) {
        self.active.clear();
        for id in ids {
            if !self.active.contains(&id) {
                self.active.push(id);
            }
        }
        if let Some(editing) = &self.editing {
            if !self.active.contains(editing) {
                self.editing = None;
            }
        }
    }

    /// Extend the active set (continue-select gesture with shift held).
    pub fn extend_active(&mut self, ids: Vec<String>) {
        for id in ids {
            if !self.active.contains(&id) {
                self.active.push(id);
            }
        }
    }

    /// Clear the active set and exit editing.
    pub fn clear_active(&mut self) {
        self.active.clear();
        self.editing = None;
    }

    /// The active ids in selection order.
    pub fn active(&self) -> &[String] {
        &self.active
    }

    /// Whether an element is a member of the active set.
    pub fn is_active(&self, id: &str) -> bool {
        self.active.iter().any(|a| a == id)
    }

    /// Whether any element is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Enter editing mode for an element. No-op unless it is active.
    pub fn enter_editing(&mut self, id: &str) {
        if self.is_active(id) {
            self.editing = Some(id.to_string());
        }
    }

    /// Exit editing mode, keeping the selection.
    pub fn exit_editing(&mut self) {
        self.editing = None;
    }

    /// The element being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Update the hovered element (mouse enter = `Some`, leave = `None`).
    pub fn set_hovered(&mut self, id: Option<String>) {
        self.hovered = id;
    }

    /// The hovered element, if any.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_set_active_dedups_and_keeps_order() {
        let mut sel = Selection::new();
        sel.set_active(ids(&["e2", "e1", "e2", "e3"]));
        assert_eq!(sel.active(), &["e2", "e1", "e3"]);
    }

    #[test]
    fn test_editing_requires_membership() {
        let mut sel = Selection::new();
        sel.set_active(ids(&["e1"]));

        sel.enter_editing("e2");
        assert_eq!(sel.editing(), None);

        sel.set_active(ids(&["e1", "e2"]));
        sel.enter_editing("e2");
        assert_eq!(sel.editing(), Some("e2"));
    }

    #[test]
    fn test_clear_active_exits_editing() {
        let mut sel = Selection::new();
        sel.set_active(ids(&["e1"]));
        sel.enter_editing("e1");
        sel.clear_active();
        assert!(sel.is_empty());
        assert_eq!(sel.editing(), None);
    }

    #[test]
    fn test_replacing_selection_drops_stale_editing() {
        let mut sel = Selection::new();
        sel.set_active(ids(&["e1"]));
        sel.enter_editing("e1");
        sel.set_active(ids(&["e2"]));
        assert_eq!(sel.editing(), None);
    }

    #[test]
    fn test_extend_active_appends() {
        let mut sel = Selection::new();
        sel.set_active(ids(&["e1"]));
        sel.extend_active(ids(&["e2", "e1"]));
        assert_eq!(sel.active(), &["e1", "e2"]);
    }

    #[test]
    fn test_hover_bookkeeping() {
        let mut sel = Selection::new();
        sel.set_hovered(Some("e1".to_string()));
        assert_eq!(sel.hovered(), Some("e1"));
        sel.set_hovered(None);
        assert_eq!(sel.hovered(), None);
    }
}
