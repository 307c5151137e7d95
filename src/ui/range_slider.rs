//! Dual-handle slider for selecting a [low, high] interval.
//!
//! egui ships no range slider, so this paints its own: a rail, the selected
//! span, and two draggable handles. The handle nearest the pointer is
//! latched at drag start and stays grabbed until release, so crossing the
//! other handle mid-drag does not swap them.

use eframe::egui::{Pos2, Response, Sense, Stroke, Ui, Vec2, Widget};

use crate::util::format_value;

const RAIL_WIDTH: f32 = 260.0;
const RAIL_HEIGHT: f32 = 20.0;
const HANDLE_RADIUS: f32 = 6.0;

/// Which handle is currently grabbed, latched for the duration of a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Grab {
    Low,
    High,
}

/// A two-handle range selection control.
///
/// Bounds are `[min, max]`; the selected interval keeps `low <= high`.
/// Values snap to `step` offsets from `min` (zero disables snapping).
pub struct RangeSlider<'a> {
    low: &'a mut f32,
    high: &'a mut f32,
    min: f32,
    max: f32,
    step: f32,
    text: Option<String>,
}

impl<'a> RangeSlider<'a> {
    pub fn new(low: &'a mut f32, high: &'a mut f32, min: f32, max: f32) -> Self {
        Self {
            low,
            high,
            min,
            max,
            step: 0.0,
            text: None,
        }
    }

    /// Snap selected values to multiples of `step` from the lower bound.
    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Label shown next to the control.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl Widget for RangeSlider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            low,
            high,
            min,
            max,
            step,
            text,
        } = self;

        ui.horizontal(|ui| {
            let desired = Vec2::new(RAIL_WIDTH, RAIL_HEIGHT);
            let (rect, mut response) = ui.allocate_exact_size(desired, Sense::click_and_drag());

            let left = rect.left() + HANDLE_RADIUS;
            let width = rect.width() - 2.0 * HANDLE_RADIUS;
            let x_of = |v: f32| -> f32 {
                let t = if max > min {
                    ((v - min) / (max - min)).clamp(0.0, 1.0)
                } else {
                    0.5
                };
                left + t * width
            };

            // Latch the grabbed handle at drag start / click.
            let grab_id = response.id.with("grab");
            if response.drag_started() || response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let grab = if (pos.x - x_of(*low)).abs() <= (pos.x - x_of(*high)).abs() {
                        Grab::Low
                    } else {
                        Grab::High
                    };
                    ui.memory_mut(|m| m.data.insert_temp(grab_id, grab));
                }
            }

            if response.dragged() || response.clicked() {
                let grab = ui.memory_mut(|m| m.data.get_temp::<Grab>(grab_id));
                if let (Some(pos), Some(grab)) = (response.interact_pointer_pos(), grab) {
                    let value = snap(value_at(pos.x, left, width, min, max), min, max, step);
                    match grab {
                        Grab::Low => *low = value.min(*high),
                        Grab::High => *high = value.max(*low),
                    }
                    response.mark_changed();
                }
            }

            if response.drag_stopped() {
                ui.memory_mut(|m| m.data.remove::<Grab>(grab_id));
            }

            // Rail, selected span, handles.
            let cy = rect.center().y;
            let rail = Stroke::new(2.0, ui.visuals().widgets.inactive.bg_fill);
            let span = Stroke::new(4.0, ui.visuals().selection.bg_fill);
            let handle_fill = ui.visuals().widgets.active.bg_fill;
            let painter = ui.painter();
            painter.line_segment([Pos2::new(left, cy), Pos2::new(left + width, cy)], rail);
            painter.line_segment(
                [Pos2::new(x_of(*low), cy), Pos2::new(x_of(*high), cy)],
                span,
            );
            for v in [*low, *high] {
                painter.circle_filled(Pos2::new(x_of(v), cy), HANDLE_RADIUS, handle_fill);
            }

            if let Some(text) = text {
                ui.label(format!(
                    "{text}: [{}, {}]",
                    format_value(*low),
                    format_value(*high)
                ));
            }

            response
        })
        .inner
    }
}

/// Map a horizontal rail position back to a value in [min, max].
fn value_at(x: f32, left: f32, width: f32, min: f32, max: f32) -> f32 {
    if width <= 0.0 || max <= min {
        return min;
    }
    let t = ((x - left) / width).clamp(0.0, 1.0);
    min + t * (max - min)
}

/// Snap a value to the nearest step offset from `min`, clamped to bounds.
/// A zero (or negative) step disables snapping.
fn snap(value: f32, min: f32, max: f32, step: f32) -> f32 {
    if step <= 0.0 {
        return value.clamp(min, max);
    }
    let steps = ((value - min) / step).round();
    (min + steps * step).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_maps_rail_endpoints() {
        assert_eq!(value_at(10.0, 10.0, 100.0, 0.0, 50.0), 0.0);
        assert_eq!(value_at(110.0, 10.0, 100.0, 0.0, 50.0), 50.0);
        assert_eq!(value_at(60.0, 10.0, 100.0, 0.0, 50.0), 25.0);
    }

    #[test]
    fn test_value_at_clamps_outside_rail() {
        assert_eq!(value_at(-5.0, 10.0, 100.0, 0.0, 50.0), 0.0);
        assert_eq!(value_at(500.0, 10.0, 100.0, 0.0, 50.0), 50.0);
    }

    #[test]
    fn test_value_at_degenerate_bounds() {
        assert_eq!(value_at(60.0, 10.0, 100.0, 7.0, 7.0), 7.0);
    }

    #[test]
    fn test_snap_rounds_to_step_grid() {
        assert_eq!(snap(0.26, 0.0, 1.0, 0.1), 0.3);
        assert_eq!(snap(0.24, 0.0, 1.0, 0.1), 0.2);
        // Offsets are relative to the lower bound.
        assert_eq!(snap(2.06, 2.0, 3.0, 0.1), 2.1);
    }

    #[test]
    fn test_snap_without_step_only_clamps() {
        assert_eq!(snap(0.37, 0.0, 1.0, 0.0), 0.37);
        assert_eq!(snap(1.5, 0.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn test_snap_stays_within_bounds() {
        // 1.0 / 0.4 rounds to 3 steps = 1.2; clamping pulls it back.
        assert_eq!(snap(1.0, 0.0, 1.0, 0.4), 1.0);
        assert_eq!(snap(0.99, 0.0, 1.0, 0.4), 0.8);
    }
}
