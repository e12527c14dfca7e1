use std::sync::Arc;

use egui::Color32;

use crate::intent::DrawingIntent;
use crate::stroke::{MutableStroke, StrokeRef};

/// Brush thickness bounds, in pixels. Values outside are clamped, not rejected.
pub const MIN_BRUSH_SIZE: f32 = 5.0;
pub const MAX_BRUSH_SIZE: f32 = 50.0;
pub const DEFAULT_BRUSH_SIZE: f32 = 10.0;
pub const DEFAULT_COLOR: Color32 = Color32::BLACK;

/// One immutable snapshot of the whole drawing.
///
/// Snapshots are published behind an `Arc` and never mutated in place, so a
/// reader (the render pass, a subscriber on another thread) can hold one for
/// as long as it likes without observing a partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingState {
    /// Tool color applied to the next stroke. Always fully opaque.
    pub selected_color: Color32,
    /// Tool thickness applied to the next stroke. Always within
    /// [`MIN_BRUSH_SIZE`]..=[`MAX_BRUSH_SIZE`].
    pub brush_size: f32,
    /// Display-mode flag. Purely presentational; stroke data ignores it.
    pub is_dark_mode: bool,
    /// The stroke being drawn right now, present only between
    /// [`DrawingIntent::StrokeBegin`] and [`DrawingIntent::StrokeEnd`].
    pub current_stroke: Option<MutableStroke>,
    /// Committed strokes, oldest first. Commit order is painter's order:
    /// later strokes draw on top. Undo pops from the back.
    pub history: Vec<StrokeRef>,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            selected_color: DEFAULT_COLOR,
            brush_size: DEFAULT_BRUSH_SIZE,
            is_dark_mode: false,
            current_stroke: None,
            history: Vec::new(),
        }
    }
}

type Subscriber = Box<dyn Fn(&Arc<DrawingState>)>;

/// Owns the authoritative [`DrawingState`] and reduces intents into it.
///
/// [`DrawingStore::apply`] is the single mutation entry point. Every call,
/// including one that reduces to a no-op, replaces the held snapshot with a
/// freshly built one and notifies all subscribers synchronously. Observers
/// that want to skip redundant work can diff the snapshots themselves.
pub struct DrawingStore {
    state: Arc<DrawingState>,
    subscribers: Vec<Subscriber>,
}

impl Default for DrawingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(DrawingState::default()),
            subscribers: Vec::new(),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<DrawingState> {
        Arc::clone(&self.state)
    }

    /// Register a callback invoked with every published snapshot.
    pub fn subscribe(&mut self, subscriber: impl Fn(&Arc<DrawingState>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply one intent, publish the resulting snapshot, and return it.
    pub fn apply(&mut self, intent: DrawingIntent) -> Arc<DrawingState> {
        let next = reduce(&self.state, intent);
        self.state = Arc::new(next);
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
        Arc::clone(&self.state)
    }
}

/// Total reducer over (state, intent). No intent fails; out-of-order
/// sequences leave the state unchanged apart from the republished snapshot.
fn reduce(state: &DrawingState, intent: DrawingIntent) -> DrawingState {
    let mut next = state.clone();
    match intent {
        DrawingIntent::StrokeBegin => {
            // A begin while another stroke is active discards the half-drawn
            // one; exactly one stroke is ever active.
            let stroke = MutableStroke::start(next.selected_color, next.brush_size);
            log::trace!("stroke {} begins", stroke.id());
            next.current_stroke = Some(stroke);
        }
        DrawingIntent::StrokeAppendPoint(point) => {
            // Drag-move events with no preceding begin are dropped silently.
            if let Some(stroke) = next.current_stroke.as_mut() {
                stroke.add_point(point);
            }
        }
        DrawingIntent::StrokeEnd => {
            // A stroke with zero points (a tap) still commits; the renderer
            // draws nothing for it but undo can still remove it.
            if let Some(stroke) = next.current_stroke.take() {
                log::debug!(
                    "stroke {} committed with {} points",
                    stroke.id(),
                    stroke.points().len()
                );
                next.history.push(stroke.into_stroke_ref());
            }
        }
        DrawingIntent::SelectColor(color) => {
            // Tool colors are always stored fully opaque.
            next.selected_color = Color32::from_rgb(color.r(), color.g(), color.b());
        }
        DrawingIntent::SetBrushSize(size) => {
            next.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        }
        DrawingIntent::ToggleDarkMode => {
            next.is_dark_mode = !next.is_dark_mode;
        }
        DrawingIntent::Undo => {
            // Undo mid-drag aborts the in-progress stroke instead of popping
            // a committed one.
            if next.current_stroke.is_some() {
                log::debug!("in-progress stroke aborted by undo");
                next.current_stroke = None;
            } else if let Some(stroke) = next.history.pop() {
                log::debug!("stroke {} undone", stroke.id());
            }
        }
        DrawingIntent::Clear => {
            log::debug!("canvas cleared, {} strokes dropped", next.history.len());
            next.history.clear();
            next.current_stroke = None;
        }
    }
    next
}
