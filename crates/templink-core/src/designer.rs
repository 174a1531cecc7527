//! Designer facade wiring document, viewport, guides, selection and gestures.

use crate::document::TemplateDocument;
use crate::guides::GuideStore;
use crate::input::{InputContext, KeyEvent, Modifiers};
use crate::selection::Selection;
use crate::session::{Bounds, GestureController, GestureTarget, ResizeDirection, ScreenRect};
use crate::sync::{self, FieldChange, SchemaSink};
use crate::viewport::Viewport;

/// The interaction engine for one designer view.
///
/// Owns the pieces a view needs to run selection and manipulation, and
/// exposes the callback surface the host wires up: selection replacement,
/// hover notifications, gesture begin/move/end, and content edits. Commits
/// go to whatever [`SchemaSink`] the caller hands to [`Designer::end_gesture`].
#[derive(Debug, Clone, Default)]
pub struct Designer {
    pub document: TemplateDocument,
    pub viewport: Viewport,
    pub guides: GuideStore,
    pub selection: Selection,
    pub input: InputContext,
    controller: GestureController,
}

impl Designer {
    /// Create a designer over a document.
    pub fn new(document: TemplateDocument, viewport: Viewport) -> Self {
        Self {
            document,
            viewport,
            ..Self::default()
        }
    }

    /// Forward a key event from the host window.
    pub fn handle_key_event(&mut self, event: &KeyEvent, modifiers: Modifiers) {
        self.input.handle_key_event(event, modifiers);
    }

    /// Replace the active selection, or extend it while the continue-select
    /// modifier is held.
    pub fn set_active_elements(&mut self, ids: Vec<String>) {
        if self.input.continue_select() {
            self.selection.extend_active(ids);
        } else {
            self.selection.set_active(ids);
        }
    }

    /// A click on empty canvas area exits editing. Whether the selection
    /// itself survives is the selection tool's call, so it is untouched here.
    pub fn click_background(&mut self) {
        self.selection.exit_editing();
    }

    /// A click on the manipulation frame enters editing for the element,
    /// gated on membership in the active set.
    pub fn enter_editing(&mut self, id: &str) {
        self.selection.enter_editing(id);
    }

    /// Hover notification from an element.
    pub fn on_mouse_enter(&mut self, id: &str) {
        self.selection.set_hovered(Some(id.to_string()));
    }

    /// Hover cleared.
    pub fn on_mouse_leave(&mut self) {
        self.selection.set_hovered(None);
    }

    /// Horizontal guide lines of the active page, in screen space.
    pub fn horizontal_guides(&self) -> Vec<f64> {
        self.guides
            .horizontal_lines(self.document.page_cursor, &self.viewport)
    }

    /// Vertical guide lines of the active page, in screen space.
    pub fn vertical_guides(&self) -> Vec<f64> {
        self.guides
            .vertical_lines(self.document.page_cursor, &self.viewport)
    }

    /// Containment bounds for the active page: page size in screen pixels
    /// plus the ruler strip, as the interaction surface configures them.
    pub fn page_bounds(&self) -> Option<Bounds> {
        self.document.current_page().map(|page| Bounds {
            left: 0.0,
            top: 0.0,
            right: self.viewport.to_screen(page.size.width) + self.viewport.ruler_offset,
            bottom: self.viewport.to_screen(page.size.height) + self.viewport.ruler_offset,
        })
    }

    /// Screen-space frames of the active elements, in selection order.
    fn active_targets(&self) -> Vec<GestureTarget> {
        self.selection
            .active()
            .iter()
            .filter_map(|id| {
                self.document.element(id).map(|e| {
                    GestureTarget::new(
                        id.clone(),
                        ScreenRect::new(
                            self.viewport.to_screen(e.position.x),
                            self.viewport.to_screen(e.position.y),
                            self.viewport.to_screen(e.size.width),
                            self.viewport.to_screen(e.size.height),
                        ),
                    )
                })
            })
            .collect()
    }

    /// Start dragging the active elements.
    pub fn begin_drag(&mut self) {
        let bounds = self.page_bounds();
        self.controller.begin_drag(self.active_targets(), bounds);
    }

    /// Start resizing the active elements.
    pub fn begin_resize(&mut self) {
        let bounds = self.page_bounds();
        self.controller.begin_resize(self.active_targets(), bounds);
    }

    /// Drag-move for one target (fires once per pointer move).
    pub fn drag_to(&mut self, id: &str, left: f64, top: f64) {
        self.controller.drag_move(id, left, top);
    }

    /// Resize-move for one target.
    pub fn resize_to(&mut self, id: &str, width: f64, height: f64, direction: ResizeDirection) {
        self.controller.resize_move(id, width, height, direction);
    }

    /// Live frames of the gesture in flight, for the rendering layer.
    pub fn live_frames(&self) -> &[GestureTarget] {
        self.controller.gesture().map_or(&[], |g| g.targets())
    }

    /// End the gesture and commit its batch to the sink. Tolerates an end
    /// without a live gesture.
    pub fn end_gesture(&mut self, sink: &mut dyn SchemaSink) {
        let changes = self.controller.finish(&self.viewport);
        sync::emit(sink, changes);
    }

    /// Drop the gesture in flight without committing (view torn down
    /// mid-gesture).
    pub fn abandon_gesture(&mut self) {
        self.controller.abandon();
    }

    /// Content edit from the schema widgets, forwarded as a single change.
    pub fn change_data(&mut self, id: &str, value: &str, sink: &mut dyn SchemaSink) {
        sync::emit(sink, vec![FieldChange::data(value, id)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Element, Page};
    use crate::sync::RecordingSink;
    use kurbo::{Point, Size};

    fn designer() -> Designer {
        let mut doc = TemplateDocument::new();
        doc.add_page(Page::new(Size::new(210.0, 297.0)));
        doc.add_element(Element::with_id(
            "e1",
            Point::new(10.0, 10.0),
            Size::new(50.0, 25.0),
            0,
        ));
        doc.add_element(Element::with_id(
            "e2",
            Point::new(100.0, 40.0),
            Size::new(30.0, 30.0),
            0,
        ));
        Designer::new(doc, Viewport::new(2.0, 16.0))
    }

    fn shift() -> Modifiers {
        Modifiers {
            shift: true,
            ..Modifiers::default()
        }
    }

    #[test]
    fn test_drag_commits_back_into_document() {
        let mut designer = designer();
        designer.set_active_elements(vec!["e1".to_string()]);
        designer.begin_drag();
        // zoom 2: element starts at screen (20, 20)
        designer.drag_to("e1", 41.0, 20.0);

        let mut doc = designer.document.clone();
        designer.end_gesture(&mut doc);
        let e = doc.element("e1").unwrap();
        assert!((e.position.x - 20.5).abs() < f64::EPSILON);
        assert!((e.position.y - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_group_gesture_is_atomic() {
        let mut designer = designer();
        designer.set_active_elements(vec!["e1".to_string(), "e2".to_string()]);
        designer.begin_drag();
        designer.drag_to("e1", 0.0, 0.0);
        designer.drag_to("e2", 10.0, 10.0);

        let mut sink = RecordingSink::new();
        designer.end_gesture(&mut sink);
        assert_eq!(sink.batches.len(), 1);
        assert_eq!(sink.batches[0].len(), 4);
    }

    #[test]
    fn test_continue_select_extends() {
        let mut designer = designer();
        designer.set_active_elements(vec!["e1".to_string()]);
        designer.handle_key_event(&KeyEvent::Pressed("Shift".to_string()), shift());
        designer.set_active_elements(vec!["e2".to_string()]);
        assert_eq!(designer.selection.active(), &["e1", "e2"]);

        designer.handle_key_event(&KeyEvent::Released("Shift".to_string()), Modifiers::default());
        designer.set_active_elements(vec!["e2".to_string()]);
        assert_eq!(designer.selection.active(), &["e2"]);
    }

    #[test]
    fn test_background_click_exits_editing_only() {
        let mut designer = designer();
        designer.set_active_elements(vec!["e1".to_string()]);
        designer.enter_editing("e1");
        designer.click_background();
        assert_eq!(designer.selection.editing(), None);
        assert_eq!(designer.selection.active(), &["e1"]);
    }

    #[test]
    fn test_page_bounds_follow_viewport() {
        let designer = designer();
        let bounds = designer.page_bounds().unwrap();
        assert!((bounds.right - (210.0 * 2.0 + 16.0)).abs() < f64::EPSILON);
        assert!((bounds.bottom - (297.0 * 2.0 + 16.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_guides_only_for_active_page() {
        let mut designer = designer();
        designer.guides.add_horizontal(0, 50.0);
        designer.guides.add_horizontal(1, 70.0);
        assert_eq!(designer.horizontal_guides(), vec![116.0]);

        designer.document.page_cursor = 1;
        assert_eq!(designer.horizontal_guides(), vec![156.0]);
        designer.document.page_cursor = 2;
        assert!(designer.horizontal_guides().is_empty());
    }

    #[test]
    fn test_end_without_begin_emits_nothing() {
        let mut designer = designer();
        let mut sink = RecordingSink::new();
        designer.end_gesture(&mut sink);
        assert!(sink.batches.is_empty());
    }

    #[test]
    fn test_live_frames_visible_during_gesture() {
        let mut designer = designer();
        designer.set_active_elements(vec!["e1".to_string()]);
        assert!(designer.live_frames().is_empty());

        designer.begin_drag();
        assert_eq!(designer.live_frames().len(), 1);
        // zoom 2: logical (10, 10, 50, 25) -> screen (20, 20, 100, 50)
        assert_eq!(
            designer.live_frames()[0].frame,
            ScreenRect::new(20.0, 20.0, 100.0, 50.0)
        );

        designer.abandon_gesture();
        assert!(designer.live_frames().is_empty());
    }

    #[test]
    fn test_change_data_routes_through_sink() {
        let mut designer = designer();
        let mut doc = designer.document.clone();
        designer.change_data("e2", "Invoice #42", &mut doc);
        assert_eq!(doc.element("e2").unwrap().data, "Invoice #42");
    }

    #[test]
    fn test_hover_notifications() {
        let mut designer = designer();
        designer.on_mouse_enter("e1");
        assert_eq!(designer.selection.hovered(), Some("e1"));
        designer.on_mouse_leave();
        assert_eq!(designer.selection.hovered(), None);
    }
}
