//! Templink Core Library
//!
//! Interaction engine for the Templink template designer: selection,
//! drag/resize manipulation, guide projection, and schema synchronization
//! over a paginated canvas. Rendering and persistence live elsewhere.

pub mod designer;
pub mod document;
pub mod guides;
pub mod input;
pub mod selection;
pub mod session;
pub mod sync;
pub mod viewport;

pub use designer::Designer;
pub use document::{Element, Page, TemplateDocument};
pub use guides::{GuideSet, GuideStore};
pub use input::{InputContext, KeyEvent, Modifiers};
pub use selection::Selection;
pub use session::{
    Bounds, Gesture, GestureController, GestureKind, GestureTarget, ResizeDirection, ScreenRect,
};
pub use sync::{FieldChange, FieldKey, RecordingSink, SchemaSink};
pub use viewport::{GeometryError, GeometryResult, Viewport, parse_px, round_logical};
