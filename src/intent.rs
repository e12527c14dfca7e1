use egui::{Color32, Pos2};

/// A discrete user action delivered to the [`DrawingStore`](crate::DrawingStore).
///
/// Intents are the only way to change drawing state. They carry value
/// payloads only, and none of them can fail: sequences that make no sense
/// (appending a point with no stroke in progress, undoing with an empty
/// history) reduce to no-ops. Pointer gesture delivery can legitimately skip
/// or reorder edge events, so the store tolerates them silently instead of
/// erroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingIntent {
    /// A drag began: start a fresh stroke with the current tool settings.
    StrokeBegin,
    /// A pointer sample arrived mid-drag.
    StrokeAppendPoint(Pos2),
    /// The drag ended (or was cancelled): commit the stroke to history.
    StrokeEnd,
    /// Pick a new tool color. Takes effect from the next stroke.
    SelectColor(Color32),
    /// Set the brush thickness, clamped to the allowed range.
    /// Takes effect from the next stroke.
    SetBrushSize(f32),
    /// Flip between light and dark display mode.
    ToggleDarkMode,
    /// Remove the most recent committed stroke, or abort the one in progress.
    Undo,
    /// Drop everything: history and any in-progress stroke.
    Clear,
}
