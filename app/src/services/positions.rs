//! Sparse position planning for kanban columns.
//!
//! Positions inside a (project, status) column are assigned in multiples of
//! ten so that most inserts can take the midpoint between two neighbours
//! without touching any other row. When no integer gap is left, the whole
//! column is renumbered and the insert proceeds on top of the fresh spacing.

/// Gap between consecutive positions after a renumbering.
pub const POSITION_STEP: i32 = 10;

/// Position for a task appended to the bottom of a column.
///
/// `max_position` is the current maximum in the column, or `None` when the
/// column is empty.
pub fn append_position(max_position: Option<i32>) -> i32 {
    match max_position {
        Some(max) => (max / POSITION_STEP) * POSITION_STEP + POSITION_STEP,
        None => POSITION_STEP,
    }
}

/// Outcome of planning a same-column move.
#[derive(Debug, Clone, PartialEq)]
pub enum RepositionPlan {
    /// Write this position; no other row moves.
    Place { position: i32 },
    /// Renumber the whole column, then write this position.
    PlaceAfterRedistribute { position: i32 },
}

impl RepositionPlan {
    pub fn position(&self) -> i32 {
        match self {
            Self::Place { position } => *position,
            Self::PlaceAfterRedistribute { position } => *position,
        }
    }

    pub fn needs_redistribution(&self) -> bool {
        matches!(self, Self::PlaceAfterRedistribute { .. })
    }
}

/// Plan where a task lands when moved to `new_position` within its column.
///
/// `positions` holds every position currently in the column (the moving task
/// included), sorted ascending. The first entry `>= new_position` is the
/// "after" neighbour; the entry just before it is the "before" neighbour.
pub fn plan_reposition(positions: &[i32], new_position: i32) -> RepositionPlan {
    let Some(after_index) = positions.iter().position(|&p| p >= new_position) else {
        // Past the end of the column: the requested value is already safe.
        return RepositionPlan::Place {
            position: new_position,
        };
    };

    let after = positions[after_index];

    if after_index == 0 {
        // Front insert, treated as a gap between a virtual 0 and `after`.
        let position = after / 2;
        if after < 2 {
            return RepositionPlan::PlaceAfterRedistribute { position };
        }
        return RepositionPlan::Place { position };
    }

    let before = positions[after_index - 1];
    let gap = after - before;
    let position = before + gap / 2;

    if gap < 2 {
        // No integer fits between the neighbours.
        RepositionPlan::PlaceAfterRedistribute { position }
    } else {
        RepositionPlan::Place { position }
    }
}

/// Fresh positions for a column of `count` tasks: `10, 20, …, 10 * count`.
///
/// Callers must apply these in the column's current ascending position order
/// so relative order survives the renumbering.
pub fn redistributed_positions(count: usize) -> Vec<i32> {
    (1..=count as i32).map(|i| i * POSITION_STEP).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_to_empty_column_defaults_to_ten() {
        assert_eq!(append_position(None), 10);
    }

    #[test]
    fn append_lands_strictly_below_the_column() {
        // 10, 20, 30 -> 40
        assert_eq!(append_position(Some(30)), 40);
    }

    #[test]
    fn append_rounds_down_odd_maximums() {
        assert_eq!(append_position(Some(35)), 40);
        assert_eq!(append_position(Some(41)), 50);
    }

    #[test]
    fn append_is_greater_than_every_existing_position() {
        for max in [1, 9, 10, 15, 99, 100] {
            assert!(append_position(Some(max)) > max);
        }
    }

    #[test]
    fn midpoint_insert_between_two_neighbours() {
        // before=10, after=20, gap=10 -> 10 + 5
        let plan = plan_reposition(&[10, 20], 15);
        assert_eq!(plan, RepositionPlan::Place { position: 15 });
    }

    #[test]
    fn insert_past_the_end_keeps_the_requested_value() {
        let plan = plan_reposition(&[10, 20, 30], 55);
        assert_eq!(plan, RepositionPlan::Place { position: 55 });
    }

    #[test]
    fn insert_into_empty_column_keeps_the_requested_value() {
        let plan = plan_reposition(&[], 10);
        assert_eq!(plan, RepositionPlan::Place { position: 10 });
    }

    #[test]
    fn front_insert_halves_the_first_position() {
        let plan = plan_reposition(&[10, 20], 5);
        assert_eq!(plan, RepositionPlan::Place { position: 5 });
    }

    #[test]
    fn front_insert_with_no_room_triggers_redistribution() {
        let plan = plan_reposition(&[1, 10], 1);
        assert!(plan.needs_redistribution());
        assert_eq!(plan.position(), 0);
    }

    #[test]
    fn adjacent_neighbours_trigger_redistribution() {
        // gap = 11 - 10 = 1, midpoint degenerates to the before position
        let plan = plan_reposition(&[10, 11], 11);
        assert_eq!(
            plan,
            RepositionPlan::PlaceAfterRedistribute { position: 10 }
        );
    }

    #[test]
    fn wide_gaps_do_not_redistribute() {
        let plan = plan_reposition(&[10, 20, 30, 40], 25);
        assert_eq!(plan, RepositionPlan::Place { position: 25 });
    }

    #[test]
    fn redistribution_spacing_is_exact() {
        assert_eq!(redistributed_positions(4), vec![10, 20, 30, 40]);
        assert_eq!(redistributed_positions(0), Vec::<i32>::new());
    }

    #[test]
    fn redistribution_preserves_relative_order() {
        // Crowded column: order by position must be unchanged after renumbering.
        let column = [3, 4, 5, 17, 18];
        let fresh = redistributed_positions(column.len());

        assert_eq!(fresh.len(), column.len());
        for pair in fresh.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(*fresh.last().unwrap(), 10 * column.len() as i32);
    }
}
