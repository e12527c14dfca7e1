#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod input;
pub mod intent;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod theme;

pub use app::ScribbleApp;
pub use intent::DrawingIntent;
pub use renderer::{QuadSegment, smooth};
pub use state::{DrawingState, DrawingStore};
pub use stroke::{MutableStroke, Stroke, StrokeRef};
