//! Pie chart geometry for per-month entry counts.
//!
//! Paths are SVG path strings on a square canvas; slices start at twelve
//! o'clock and run clockwise in month order.

use std::f64::consts::PI;

use serde::Serialize;

/// Canvas edge length.
pub const PIE_SIZE: f64 = 100.0;

/// Slice radius.
pub const PIE_RADIUS: f64 = 44.0;

/// A full circle cannot be drawn as one arc; single slices are clamped to this.
const MAX_SWEEP: f64 = 2.0 * PI - 0.001;

/// One color per month, January first.
pub const MONTH_COLORS: [&str; 12] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
    "#F97316", "#6366F1", "#14B8A6", "#A855F7",
];

/// A drawable slice for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// 1-based month
    pub month: u32,
    pub color: &'static str,
    /// Fraction of all entries in this month
    pub share: f64,
    pub path: String,
}

/// Build slices for every month with a non-zero count.
///
/// Returns no slices when the total is zero.
pub fn pie_slices(month_counts: &[u32; 12]) -> Vec<PieSlice> {
    let total: u32 = month_counts.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let cx = PIE_SIZE / 2.0;
    let cy = PIE_SIZE / 2.0;
    let mut start = -PI / 2.0;
    let mut slices = Vec::new();

    for (index, &count) in month_counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let share = count as f64 / total as f64;
        let sweep = (share * 2.0 * PI).min(MAX_SWEEP);
        let end = start + sweep;
        let (x1, y1) = point_on_circle(cx, cy, start);
        let (x2, y2) = point_on_circle(cx, cy, end);
        let large_arc = if sweep > PI { 1 } else { 0 };
        let path = format!(
            "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
            cx, cy, x1, y1, PIE_RADIUS, PIE_RADIUS, large_arc, x2, y2
        );
        slices.push(PieSlice {
            month: index as u32 + 1,
            color: MONTH_COLORS[index],
            share,
            path,
        });
        start = end;
    }
    slices
}

fn point_on_circle(cx: f64, cy: f64, angle: f64) -> (f64, f64) {
    (cx + PIE_RADIUS * angle.cos(), cy + PIE_RADIUS * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_counts_have_no_slices() {
        assert!(pie_slices(&[0; 12]).is_empty());
    }

    #[test]
    fn test_skips_empty_months() {
        let mut counts = [0u32; 12];
        counts[0] = 1;
        counts[2] = 3;
        let slices = pie_slices(&counts);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].month, 1);
        assert_eq!(slices[0].color, MONTH_COLORS[0]);
        assert_eq!(slices[1].month, 3);
        assert!((slices[1].share - 0.75).abs() < 1e-9);
        // Three quarters of the circle needs the large-arc flag.
        assert!(slices[1].path.contains(" 0 1 1 "));
        assert!(slices[0].path.contains(" 0 0 1 "));
    }

    #[test]
    fn test_first_slice_starts_at_top() {
        let mut counts = [0u32; 12];
        counts[5] = 1;
        counts[6] = 1;
        let slices = pie_slices(&counts);
        assert!(slices[0].path.starts_with("M 50 50 L 50 6 A 44 44"));
    }

    #[test]
    fn test_single_month_is_clamped() {
        let mut counts = [0u32; 12];
        counts[11] = 7;
        let slices = pie_slices(&counts);
        assert_eq!(slices.len(), 1);
        assert!(slices[0].path.contains(" 0 1 1 "));
        assert!(slices[0].path.ends_with(" Z"));
        assert!((slices[0].share - 1.0).abs() < 1e-9);
    }
}
