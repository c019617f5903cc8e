//! Shared types for the AyurSutra assistant: chat messages, id allocation,
//! session events, floating-panel placement, and the error taxonomy used
//! across the workspace.

pub mod errors;
pub mod events;
pub mod id;
pub mod panel;
pub mod types;

pub use errors::{AyurError, ConfigError};
pub use events::{EventBus, SessionEvent};
pub use id::{MessageId, MessageIdAllocator};
pub use panel::{DragTarget, PanelDrag, PanelPlacement, PointerButton};
pub use types::{Message, Point, Rect, Sender, Size};

pub type Result<T> = std::result::Result<T, AyurError>;
