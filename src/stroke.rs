use egui::{Color32, Pos2};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

// Single static counter for all strokes. Uniqueness is the only requirement;
// creation order falls out of the counter for free.
static NEXT_STROKE_ID: AtomicU64 = AtomicU64::new(1);

fn next_stroke_id() -> u64 {
    NEXT_STROKE_ID.fetch_add(1, Ordering::SeqCst)
}

/// A committed stroke: one finished pointer-drag gesture.
///
/// Color and brush size are copied from the tool settings when the gesture
/// begins and never change afterwards. Committed strokes are shared between
/// snapshots as [`StrokeRef`] and are never mutated again.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: u64,
    color: Color32,
    brush_size: f32,
    points: Vec<Pos2>,
}

/// Reference-counted handle to a committed, immutable stroke.
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(id: u64, color: Color32, brush_size: f32, points: Vec<Pos2>) -> Self {
        Self {
            id,
            color,
            brush_size,
            points,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}

/// The stroke currently being drawn.
///
/// Starts out empty and grows by one point per pointer sample while the drag
/// is in progress. Freezing it into a [`StrokeRef`] ends its life.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableStroke {
    id: u64,
    color: Color32,
    brush_size: f32,
    points: Vec<Pos2>,
}

impl MutableStroke {
    /// Start a fresh stroke with the given tool settings and a new unique id.
    pub fn start(color: Color32, brush_size: f32) -> Self {
        Self {
            id: next_stroke_id(),
            color,
            brush_size,
            points: Vec::new(),
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// Freeze into an immutable, shareable stroke.
    pub fn into_stroke_ref(self) -> StrokeRef {
        Arc::new(Stroke::new(self.id, self.color, self.brush_size, self.points))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn freeze_preserves_settings_and_point_order() {
        let mut stroke = MutableStroke::start(Color32::RED, 12.0);
        stroke.add_point(pos2(1.0, 2.0));
        stroke.add_point(pos2(3.0, 4.0));

        let frozen = stroke.into_stroke_ref();
        assert_eq!(frozen.color(), Color32::RED);
        assert_eq!(frozen.brush_size(), 12.0);
        assert_eq!(frozen.points(), &[pos2(1.0, 2.0), pos2(3.0, 4.0)]);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = MutableStroke::start(Color32::BLACK, 10.0);
        let b = MutableStroke::start(Color32::BLACK, 10.0);
        assert!(b.id() > a.id());
    }
}
