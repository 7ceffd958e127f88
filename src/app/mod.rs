//! Anwendungsschicht: Zustand, Pointer-Events, Zeichen-Tools und Handler.

pub mod events;
pub mod handlers;
pub mod state;
pub mod tools;

pub use events::{PointerButton, PointerEvent};
pub use state::{AppState, SketchState};
pub use tools::{DrawTool, DrawToolKind, ToolManager};
