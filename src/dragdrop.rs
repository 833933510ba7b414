//! Drag-reorder controller for the portfolio list.
//!
//! Models the pointer interaction `Idle → Dragging → (Dropped | Cancelled) →
//! Idle` over the measured row geometry. The browser shim reports the dragged
//! row, the pointer position and the visible row boxes; this module decides
//! where the dragged row lands. Everything here is pure: the atomic `order`
//! rewrite only happens when the dropped sequence is submitted to the
//! repository.

use serde::{Deserialize, Serialize};

/// Measured geometry of one rendered list row.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RowBox {
    pub idx: String,
    /// Top edge in the list's coordinate space.
    pub top: f64,
    pub height: f64,
}

impl RowBox {
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Where the dragged row is inserted for the current pointer position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Placement {
    /// Insert before the row with this idx.
    Before(String),
    /// No row midpoint sits below the pointer; the row moves to the end.
    AtEnd,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        idx: String,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Begins dragging the given row.
    pub fn start(&mut self, idx: impl Into<String>) {
        self.state = DragState::Dragging { idx: idx.into() };
    }

    /// Computes the insertion point for the current pointer position.
    ///
    /// Among the non-dragged rows whose vertical midpoint lies below the
    /// pointer, the anchor is the one closest to it (the greatest negative
    /// `pointer - midpoint` offset). Returns `None` while idle.
    pub fn placement(&self, rows: &[RowBox], pointer_y: f64) -> Option<Placement> {
        let DragState::Dragging { idx } = &self.state else {
            return None;
        };

        Some(match insertion_anchor(rows, idx, pointer_y) {
            Some(anchor) => Placement::Before(anchor.idx.clone()),
            None => Placement::AtEnd,
        })
    }

    /// The full row order with the dragged row optimistically reinserted at
    /// the pointer position. Purely visual; no store call is made.
    pub fn preview_order(&self, rows: &[RowBox], pointer_y: f64) -> Option<Vec<String>> {
        let DragState::Dragging { idx } = &self.state else {
            return None;
        };
        let placement = self.placement(rows, pointer_y)?;

        let mut order: Vec<String> = rows
            .iter()
            .filter(|row| row.idx != *idx)
            .map(|row| row.idx.clone())
            .collect();

        match placement {
            Placement::Before(anchor) => {
                let at = order.iter().position(|i| *i == anchor).unwrap_or(order.len());
                order.insert(at, idx.clone());
            }
            Placement::AtEnd => order.push(idx.clone()),
        }

        Some(order)
    }

    /// Releases the drag over the list, yielding the ordered idx sequence to
    /// submit as an atomic reorder. Returns to `Idle`.
    pub fn drop_at(&mut self, rows: &[RowBox], pointer_y: f64) -> Option<Vec<String>> {
        let order = self.preview_order(rows, pointer_y);
        self.state = DragState::Idle;
        order
    }

    /// Aborts the drag without a drop target. No remote call is made.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

fn insertion_anchor<'a>(rows: &'a [RowBox], dragged_idx: &str, pointer_y: f64) -> Option<&'a RowBox> {
    let mut closest: Option<(&RowBox, f64)> = None;

    for row in rows.iter().filter(|row| row.idx != dragged_idx) {
        let offset = pointer_y - row.midpoint();
        if offset < 0.0 && closest.is_none_or(|(_, best)| offset > best) {
            closest = Some((row, offset));
        }
    }

    closest.map(|(row, _)| row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RowBox> {
        vec![
            RowBox {
                idx: "a".into(),
                top: 0.0,
                height: 100.0,
            },
            RowBox {
                idx: "b".into(),
                top: 100.0,
                height: 100.0,
            },
            RowBox {
                idx: "c".into(),
                top: 200.0,
                height: 100.0,
            },
        ]
    }

    #[test]
    fn idle_controller_produces_nothing() {
        let controller = DragController::new();
        assert_eq!(controller.state(), &DragState::Idle);
        assert_eq!(controller.placement(&rows(), 10.0), None);
        assert_eq!(controller.preview_order(&rows(), 10.0), None);
    }

    #[test]
    fn dragging_last_row_above_first_moves_it_to_front() {
        let mut controller = DragController::new();
        controller.start("c");

        // Pointer above the first row's midpoint (50.0).
        assert_eq!(
            controller.placement(&rows(), 10.0),
            Some(Placement::Before("a".into()))
        );
        assert_eq!(
            controller.drop_at(&rows(), 10.0),
            Some(vec!["c".to_string(), "a".to_string(), "b".to_string()])
        );
        assert_eq!(controller.state(), &DragState::Idle);
    }

    #[test]
    fn pointer_below_all_midpoints_appends_at_end() {
        let mut controller = DragController::new();
        controller.start("a");

        assert_eq!(controller.placement(&rows(), 280.0), Some(Placement::AtEnd));
        assert_eq!(
            controller.preview_order(&rows(), 280.0),
            Some(vec!["b".to_string(), "c".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn anchor_is_nearest_midpoint_below_pointer() {
        let mut controller = DragController::new();
        controller.start("a");

        // Midpoints of b and c are 150 and 250; both are below a pointer at
        // 120, and b (offset -30) is closer than c (offset -130).
        assert_eq!(
            controller.placement(&rows(), 120.0),
            Some(Placement::Before("b".into()))
        );
        // Between the midpoints of b and c only c qualifies.
        assert_eq!(
            controller.placement(&rows(), 180.0),
            Some(Placement::Before("c".into()))
        );
    }

    #[test]
    fn dragged_row_is_ignored_when_measuring() {
        let mut controller = DragController::new();
        controller.start("b");

        // Pointer sits above b's own midpoint but below a's; without
        // excluding the dragged row it would anchor on itself.
        assert_eq!(controller.placement(&rows(), 140.0), Some(Placement::Before("c".into())));
    }

    #[test]
    fn cancel_discards_the_drag_without_an_order() {
        let mut controller = DragController::new();
        controller.start("c");
        controller.cancel();

        assert_eq!(controller.state(), &DragState::Idle);
        assert_eq!(controller.preview_order(&rows(), 10.0), None);
    }

    #[test]
    fn preview_keeps_remaining_rows_stable() {
        let mut controller = DragController::new();
        controller.start("b");

        assert_eq!(
            controller.preview_order(&rows(), 10.0),
            Some(vec!["b".to_string(), "a".to_string(), "c".to_string()])
        );
    }
}
