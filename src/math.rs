//! Tick math: positions, the indicator frame, and pointer → index mapping.
//!
//! All x coordinates are local to the widget, `0.0` being the first tick
//! and `width` the last one.

use floem::kurbo::Rect;

use crate::constants;

/// Clamp any signed index into `0..count`. `count == 0` yields 0.
pub(crate) fn clamp_index(index: i64, count: usize) -> usize {
    let last = count.saturating_sub(1) as i64;
    index.clamp(0, last.max(0)) as usize
}

/// Horizontal position of tick `index` on a widget `width` wide.
///
/// Ticks are spread evenly with the first pinned to the left edge and the
/// last to the right edge. A single tick sits at 0.
pub(crate) fn tick_x(index: usize, count: usize, width: f64) -> f64 {
    if index == 0 || count < 2 {
        return 0.0;
    }
    (width / (count - 1) as f64) * index as f64
}

/// Nearest tick to pointer `x`, or `None` when the widget cannot be
/// interacted with (fewer than two ticks, zero width, non-finite input).
pub(crate) fn index_at(x: f64, count: usize, width: f64) -> Option<usize> {
    if count < 2 || width <= 0.0 || !x.is_finite() || !width.is_finite() {
        return None;
    }
    let spacing = width / (count - 1) as f64;
    let estimate = (x / spacing).round();
    Some(estimate.clamp(0.0, (count - 1) as f64) as usize)
}

/// Indicator rectangle for `index`, centered on its tick and on the
/// vertical middle of a widget of the given size.
pub(crate) fn indicator_rect(index: usize, count: usize, width: f64, height: f64) -> Rect {
    let index = clamp_index(index as i64, count);
    indicator_rect_at(tick_x(index, count, width), height)
}

/// Indicator rectangle centered on an arbitrary `x`, rounded to whole pixels.
pub(crate) fn indicator_rect_at(x: f64, height: f64) -> Rect {
    let w = constants::INDICATOR_WIDTH;
    let h = constants::INDICATOR_HEIGHT;
    let x0 = x.round() - w / 2.0;
    let y0 = height / 2.0 - h / 2.0;
    Rect::new(x0, y0, x0 + w, y0 + h)
}

/// Tick mark rectangle, kept inside `0..=width` so the end ticks are not
/// cut in half.
pub(crate) fn tick_rect(index: usize, count: usize, width: f64, height: f64) -> Rect {
    let w = constants::TICK_WIDTH;
    let h = constants::TICK_HEIGHT;
    let x0 = (tick_x(index, count, width) - w / 2.0).clamp(0.0, (width - w).max(0.0));
    let y0 = height / 2.0 - h / 2.0;
    Rect::new(x0, y0, x0 + w, y0 + h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_index_bounds() {
        assert_eq!(clamp_index(-3, 5), 0);
        assert_eq!(clamp_index(2, 5), 2);
        assert_eq!(clamp_index(9, 5), 4);
        assert_eq!(clamp_index(7, 1), 0);
        assert_eq!(clamp_index(7, 0), 0);
    }

    #[test]
    fn ticks_span_full_width() {
        assert_eq!(tick_x(0, 5, 200.0), 0.0);
        assert_eq!(tick_x(1, 5, 200.0), 50.0);
        assert_eq!(tick_x(4, 5, 200.0), 200.0);
        assert_eq!(tick_x(0, 1, 200.0), 0.0);
    }

    #[test]
    fn pointer_index_is_always_in_range() {
        for count in 2..12 {
            let width = 173.0;
            let mut x = 0.0;
            while x <= width {
                let index = index_at(x, count, width).unwrap();
                assert!(index < count, "x={x} count={count} gave {index}");
                x += 0.5;
            }
        }
    }

    #[test]
    fn pointer_outside_widget_clamps() {
        assert_eq!(index_at(-40.0, 5, 200.0), Some(0));
        assert_eq!(index_at(900.0, 5, 200.0), Some(4));
    }

    #[test]
    fn pointer_rounds_to_nearest_tick() {
        // 180 / 50 = 3.6
        assert_eq!(index_at(180.0, 5, 200.0), Some(4));
        assert_eq!(index_at(74.0, 5, 200.0), Some(1));
        assert_eq!(index_at(76.0, 5, 200.0), Some(2));
    }

    #[test]
    fn degenerate_widths_are_not_interactive() {
        assert_eq!(index_at(10.0, 1, 200.0), None);
        assert_eq!(index_at(10.0, 0, 200.0), None);
        assert_eq!(index_at(10.0, 5, 0.0), None);
        assert_eq!(index_at(f64::NAN, 5, 200.0), None);
    }

    #[test]
    fn indicator_is_centered_on_tick() {
        let rect = indicator_rect(1, 5, 200.0, 24.0);
        assert_eq!(rect.center().x, 50.0);
        assert_eq!(rect.center().y, 12.0);
        assert_eq!(rect.width(), constants::INDICATOR_WIDTH);
        assert_eq!(rect.height(), constants::INDICATOR_HEIGHT);
    }

    #[test]
    fn indicator_x_is_pixel_rounded() {
        // 100 / 3 = 33.33..
        let rect = indicator_rect(1, 4, 100.0, 20.0);
        assert_eq!(rect.center().x, 33.0);
    }

    #[test]
    fn indicator_clamps_out_of_range_index() {
        assert_eq!(indicator_rect(12, 5, 200.0, 24.0), indicator_rect(4, 5, 200.0, 24.0));
    }

    #[test]
    fn indicator_frame_round_trips_to_index() {
        for count in 2..10 {
            for k in 0..count {
                let x = indicator_rect(k, count, 317.0, 24.0).center().x;
                assert_eq!(index_at(x, count, 317.0), Some(k));
            }
        }
    }

    #[test]
    fn end_ticks_stay_inside_bounds() {
        let first = tick_rect(0, 5, 200.0, 24.0);
        let last = tick_rect(4, 5, 200.0, 24.0);
        assert_eq!(first.x0, 0.0);
        assert_eq!(last.x1, 200.0);
        assert_eq!(tick_rect(2, 5, 200.0, 24.0).center().x, 100.0);
    }
}
