#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod renderer;
pub mod document;
pub mod stroke;
pub mod state;
pub mod hand;
pub mod feed;
pub mod picker;
pub mod panels;
pub mod tools;

pub use app::PaintApp;
pub use renderer::Renderer;
pub use document::Document;
pub use stroke::{MutableStroke, Stroke};
pub use state::{EditorState, Effect};
pub use hand::{Hand, HandInput, Pointer};
pub use feed::{DetectionFeed, FrameFeed, TrackerHandle};
pub use picker::ColorWheel;
pub use tools::{DrawStrokeTool, EraserTool};
