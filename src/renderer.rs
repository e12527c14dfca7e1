use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, pos2};

/// Minimum per-axis delta between consecutive pointer samples before a curve
/// segment is emitted. Smaller movements are jitter and are absorbed into the
/// next segment once the threshold is crossed.
pub const SMOOTHNESS_THRESHOLD: f32 = 5.0;
/// Opacity of the shadow pass drawn under every stroke.
pub const SHADOW_OPACITY: f32 = 0.3;
/// How much wider the shadow pass is than the stroke itself.
pub const SHADOW_EXTRA_WIDTH: f32 = 2.0;
/// Background grid cell size.
pub const GRID_SPACING: f32 = 40.0;
/// Background grid line width.
pub const GRID_LINE_WIDTH: f32 = 1.0;

// Flattening tolerance for the quadratic segments, in pixels.
const FLATTEN_TOLERANCE: f32 = 0.3;

/// One quadratic curve segment of a smoothed stroke. The segment runs from
/// wherever the curve currently is to `end`, bending towards `control`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub control: Pos2,
    pub end: Pos2,
}

/// Derive the smoothed curve for a sequence of raw pointer samples.
///
/// Walks consecutive sample pairs; a pair whose horizontal or vertical delta
/// reaches [`SMOOTHNESS_THRESHOLD`] emits one quadratic segment with the pair
/// midpoint as control point. The result has materially fewer control points
/// than the raw samples while staying visually continuous. Empty input (and
/// input that is all jitter) yields no segments.
pub fn smooth(points: &[Pos2]) -> Vec<QuadSegment> {
    let mut segments = Vec::new();
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let dx = (from.x - to.x).abs();
        let dy = (from.y - to.y).abs();
        if dx >= SMOOTHNESS_THRESHOLD || dy >= SMOOTHNESS_THRESHOLD {
            segments.push(QuadSegment {
                control: pos2((from.x + to.x) / 2.0, (from.y + to.y) / 2.0),
                end: to,
            });
        }
    }
    segments
}

/// Flatten the smoothed curve into a single polyline, starting at the first
/// raw sample. Returns an empty path when smoothing emitted no segments.
pub fn flatten(points: &[Pos2]) -> Vec<Pos2> {
    let segments = smooth(points);
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    if segments.is_empty() {
        return Vec::new();
    }

    let mut path = vec![first];
    let mut cursor = first;
    for segment in segments {
        let curve = QuadraticBezierShape::from_points_stroke(
            [cursor, segment.control, segment.end],
            false,
            Color32::TRANSPARENT,
            EguiStroke::NONE,
        );
        // flatten() starts with the curve's first point, which we already have.
        path.extend(curve.flatten(Some(FLATTEN_TOLERANCE)).into_iter().skip(1));
        cursor = segment.end;
    }
    path
}

/// Paint one stroke: a soft shadow pass, then the stroke itself on top.
///
/// Both passes use round caps so strokes look continuous at their ends and
/// self-intersections. A stroke whose samples produce no curve (empty, or a
/// tap that never moved past the jitter threshold) paints nothing.
pub fn paint_stroke(painter: &Painter, points: &[Pos2], color: Color32, brush_size: f32) {
    let path = flatten(points);
    if path.len() < 2 {
        return;
    }
    let shadow = color.gamma_multiply(SHADOW_OPACITY);
    paint_pass(painter, &path, shadow, brush_size + SHADOW_EXTRA_WIDTH);
    paint_pass(painter, &path, color, brush_size);
}

fn paint_pass(painter: &Painter, path: &[Pos2], color: Color32, width: f32) {
    // epaint polylines are butt-capped; round the ends explicitly.
    let cap = width / 2.0;
    painter.circle_filled(path[0], cap, color);
    painter.circle_filled(path[path.len() - 1], cap, color);
    painter.add(Shape::line(path.to_vec(), EguiStroke::new(width, color)));
}

/// Paint the background grid across `rect`.
pub fn paint_grid(painter: &Painter, rect: Rect, color: Color32) {
    let stroke = EguiStroke::new(GRID_LINE_WIDTH, color);
    let mut x = rect.left();
    while x <= rect.right() {
        painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
        x += GRID_SPACING;
    }
    let mut y = rect.top();
    while y <= rect.bottom() {
        painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
        y += GRID_SPACING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_painter() -> (egui::Context, Painter) {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(400.0, 400.0));
        let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
        (ctx, painter)
    }

    #[test]
    fn no_points_no_segments() {
        assert!(smooth(&[]).is_empty());
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn jitter_below_threshold_emits_nothing() {
        let points = [pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(2.0, 2.0)];
        assert!(smooth(&points).is_empty());
        assert!(flatten(&points).is_empty());
    }

    #[test]
    fn threshold_crossing_emits_one_segment_at_the_midpoint() {
        let points = [pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(2.0, 2.0), pos2(10.0, 10.0)];
        let segments = smooth(&points);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].control, pos2(6.0, 6.0));
        assert_eq!(segments[0].end, pos2(10.0, 10.0));
    }

    #[test]
    fn single_axis_delta_is_enough() {
        // dy stays zero; dx alone crosses the threshold.
        let segments = smooth(&[pos2(0.0, 0.0), pos2(5.0, 0.0)]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].control, pos2(2.5, 0.0));
    }

    #[test]
    fn flattened_path_starts_at_first_sample_and_ends_at_last_emitted_end() {
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(20.0, 10.0)];
        let path = flatten(&points);
        assert!(path.len() >= 3);
        assert_eq!(path[0], pos2(0.0, 0.0));
        assert_eq!(*path.last().unwrap(), pos2(20.0, 10.0));
    }

    #[test]
    fn empty_stroke_paints_nothing() {
        let (_ctx, painter) = test_painter();
        // Must not panic and must issue no shapes.
        paint_stroke(&painter, &[], Color32::RED, 10.0);
        paint_stroke(&painter, &[pos2(3.0, 3.0)], Color32::RED, 10.0);
    }

    #[test]
    fn grid_painting_covers_the_rect_without_panicking() {
        let (_ctx, painter) = test_painter();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(200.0, 120.0));
        paint_grid(&painter, rect, Color32::from_rgb(0xF5, 0xF5, 0xF5));
    }
}
