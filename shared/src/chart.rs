use std::f64::consts::{PI, TAU};

pub const CHART_SIZE: f64 = 320.0;
pub const CHART_RADIUS: f64 = 150.0;
const LABEL_RADIUS_RATIO: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub enum SliceShape {
    /// The slice covers the whole disc.
    Full,
    /// SVG path data for a wedge.
    Wedge(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub color: &'static str,
    pub value: f64,
    pub share: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub shape: SliceShape,
    pub label_x: f64,
    pub label_y: f64,
}

impl PieSlice {
    pub fn percent(&self) -> f64 {
        self.share * 100.0
    }
}

fn point_at(angle: f64, radius: f64) -> (f64, f64) {
    let center = CHART_SIZE / 2.0;
    (center + radius * angle.sin(), center - radius * angle.cos())
}

fn wedge_path(start: f64, end: f64) -> String {
    let center = CHART_SIZE / 2.0;
    let (x0, y0) = point_at(start, CHART_RADIUS);
    let (x1, y1) = point_at(end, CHART_RADIUS);
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {c:.2} {c:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z",
        c = center,
        r = CHART_RADIUS,
    )
}

/// Lays `(label, value, color)` entries out clockwise from twelve o'clock.
///
/// Non-positive values get no slice; a zero total yields no slices.
pub fn pie_slices(entries: &[(&'static str, f64, &'static str)]) -> Vec<PieSlice> {
    let total: f64 = entries.iter().map(|(_, v, _)| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(entries.len());
    let mut cursor = 0.0;
    for &(label, value, color) in entries {
        if value <= 0.0 {
            continue;
        }
        let share = value / total;
        let start_angle = cursor;
        let end_angle = cursor + share * TAU;
        cursor = end_angle;

        let (shape, (label_x, label_y)) = if share >= 1.0 {
            (SliceShape::Full, point_at(0.0, 0.0))
        } else {
            let middle = (start_angle + end_angle) / 2.0;
            (
                SliceShape::Wedge(wedge_path(start_angle, end_angle)),
                point_at(middle, CHART_RADIUS * LABEL_RADIUS_RATIO),
            )
        };

        slices.push(PieSlice {
            label,
            color,
            value,
            share,
            start_angle,
            end_angle,
            shape,
            label_x,
            label_y,
        });
    }
    slices
}
