//! Drag-drop module - slot assignment and the drag gesture state machine
//!
//! [`SlotAssignment`] is the single source of truth for where every tile is:
//! a slot holds at most one tile, and a tile is in at most one slot. Any tile
//! not in a slot is in the pool.
//!
//! [`DragController`] runs one gesture at a time:
//!
//! ```text
//! Idle --pick_up--> Dragging --drop_on(slot)--> Idle
//!                            --drop_on(pool)--> Idle
//!                            --cancel-------> Idle
//! ```
//!
//! While paused every gesture step is rejected and leaves the state untouched.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{DropTarget, SlotId, TileId, ROUND_SIZE};

/// Where a tile currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Pool,
    Slot(SlotId),
}

/// Slot -> occupying tile mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotAssignment {
    occupants: ArrayVec<Option<TileId>, ROUND_SIZE>,
}

impl SlotAssignment {
    /// All `slot_count` slots empty.
    pub fn new(slot_count: usize) -> Self {
        let mut occupants = ArrayVec::new();
        for _ in 0..slot_count.min(ROUND_SIZE) {
            occupants.push(None);
        }
        Self { occupants }
    }

    pub fn slot_count(&self) -> usize {
        self.occupants.len()
    }

    pub fn occupant(&self, slot: SlotId) -> Option<TileId> {
        self.occupants.get(slot.index()).copied().flatten()
    }

    pub fn location_of(&self, tile: TileId) -> Location {
        self.occupants
            .iter()
            .position(|&o| o == Some(tile))
            .map(|i| Location::Slot(SlotId(i as u8)))
            .unwrap_or(Location::Pool)
    }

    /// Put `tile` into `slot`, returning the tile it displaced (now in the pool).
    ///
    /// The tile leaves its previous slot in the same step. Placing a tile into
    /// the slot it already occupies, or into a slot that does not exist,
    /// changes nothing.
    pub fn place(&mut self, tile: TileId, slot: SlotId) -> Option<TileId> {
        let idx = slot.index();
        if idx >= self.occupants.len() || self.occupants[idx] == Some(tile) {
            return None;
        }

        if let Location::Slot(prev) = self.location_of(tile) {
            self.occupants[prev.index()] = None;
        }
        let displaced = self.occupants[idx].replace(tile);

        debug_assert!(self.is_consistent());
        displaced
    }

    /// Return `tile` to the pool, reporting the slot it left.
    pub fn unplace(&mut self, tile: TileId) -> Option<SlotId> {
        match self.location_of(tile) {
            Location::Slot(slot) => {
                self.occupants[slot.index()] = None;
                Some(slot)
            }
            Location::Pool => None,
        }
    }

    /// `(slot, occupant)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, Option<TileId>)> + '_ {
        self.occupants
            .iter()
            .enumerate()
            .map(|(i, &o)| (SlotId(i as u8), o))
    }

    pub fn placed_count(&self) -> usize {
        self.occupants.iter().filter(|o| o.is_some()).count()
    }

    /// No tile occupies more than one slot.
    pub fn is_consistent(&self) -> bool {
        let mut seen: ArrayVec<TileId, ROUND_SIZE> = ArrayVec::new();
        for tile in self.occupants.iter().flatten() {
            if seen.contains(tile) {
                return false;
            }
            seen.push(*tile);
        }
        true
    }
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(TileId),
}

/// Result of releasing a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The tile now sits in `slot`; `displaced` went back to the pool.
    Placed {
        tile: TileId,
        slot: SlotId,
        displaced: Option<TileId>,
    },
    /// The tile left slot `from` for the pool.
    Returned { tile: TileId, from: SlotId },
    /// The gesture ended where it started.
    Unchanged,
    /// Nothing was being dragged, or the game is paused.
    Rejected,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
    hover: Option<DropTarget>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn dragging(&self) -> Option<TileId> {
        match self.state {
            DragState::Dragging(tile) => Some(tile),
            DragState::Idle => None,
        }
    }

    /// Drop target currently under the pointer, while dragging.
    pub fn hover(&self) -> Option<DropTarget> {
        self.hover
    }

    /// Start dragging `tile`. A new pick-up supersedes an unfinished gesture.
    pub fn pick_up(&mut self, tile: TileId, board: &Board, paused: bool) -> bool {
        if paused || !board.has_tile(tile) {
            return false;
        }
        self.state = DragState::Dragging(tile);
        self.hover = None;
        true
    }

    /// Track the target under the pointer. Returns whether it changed.
    pub fn set_hover(&mut self, target: Option<DropTarget>, paused: bool) -> bool {
        if paused || self.dragging().is_none() || self.hover == target {
            return false;
        }
        self.hover = target;
        true
    }

    /// Release the dragged tile onto `target`.
    pub fn drop_on(
        &mut self,
        target: DropTarget,
        assignment: &mut SlotAssignment,
        paused: bool,
    ) -> DropOutcome {
        let Some(tile) = self.dragging() else {
            return DropOutcome::Rejected;
        };
        if paused {
            return DropOutcome::Rejected;
        }

        self.state = DragState::Idle;
        self.hover = None;

        let outcome = match target {
            DropTarget::Slot(slot) => {
                if slot.index() >= assignment.slot_count()
                    || assignment.occupant(slot) == Some(tile)
                {
                    DropOutcome::Unchanged
                } else {
                    let displaced = assignment.place(tile, slot);
                    DropOutcome::Placed {
                        tile,
                        slot,
                        displaced,
                    }
                }
            }
            DropTarget::Pool => match assignment.unplace(tile) {
                Some(from) => DropOutcome::Returned { tile, from },
                None => DropOutcome::Unchanged,
            },
        };

        tracing::debug!(?tile, ?target, ?outcome, "tile dropped");
        outcome
    }

    /// Abandon the gesture. Returns whether a drag was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.dragging().is_some();
        self.state = DragState::Idle;
        self.hover = None;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::selector::RoundState;
    use crate::types::KeywordEntry;

    fn board() -> Board {
        let round: RoundState = ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(|k| KeywordEntry::owned(k, format!("means {k}")))
            .collect();
        Board::deal(&round, &mut SimpleRng::new(1))
    }

    fn drag(ctl: &mut DragController, board: &Board, a: &mut SlotAssignment, tile: u8, to: DropTarget) -> DropOutcome {
        assert!(ctl.pick_up(TileId(tile), board, false));
        ctl.drop_on(to, a, false)
    }

    #[test]
    fn place_moves_tile_between_slots() {
        let mut a = SlotAssignment::new(5);
        assert_eq!(a.place(TileId(1), SlotId(0)), None);
        assert_eq!(a.place(TileId(1), SlotId(4)), None);

        assert_eq!(a.occupant(SlotId(0)), None);
        assert_eq!(a.occupant(SlotId(4)), Some(TileId(1)));
        assert_eq!(a.location_of(TileId(1)), Location::Slot(SlotId(4)));
        assert!(a.is_consistent());
    }

    #[test]
    fn place_on_occupied_slot_displaces_to_pool() {
        let mut a = SlotAssignment::new(5);
        a.place(TileId(0), SlotId(2));
        assert_eq!(a.place(TileId(3), SlotId(2)), Some(TileId(0)));

        assert_eq!(a.location_of(TileId(0)), Location::Pool);
        assert_eq!(a.occupant(SlotId(2)), Some(TileId(3)));
        assert_eq!(a.placed_count(), 1);
    }

    #[test]
    fn place_ignores_unknown_slot() {
        let mut a = SlotAssignment::new(5);
        assert_eq!(a.place(TileId(0), SlotId(9)), None);
        assert_eq!(a.location_of(TileId(0)), Location::Pool);
    }

    #[test]
    fn unplace_reports_previous_slot() {
        let mut a = SlotAssignment::new(5);
        a.place(TileId(2), SlotId(1));
        assert_eq!(a.unplace(TileId(2)), Some(SlotId(1)));
        assert_eq!(a.unplace(TileId(2)), None);
    }

    #[test]
    fn drop_on_slot_places_and_ends_gesture() {
        let b = board();
        let mut a = SlotAssignment::new(b.len());
        let mut ctl = DragController::new();

        let outcome = drag(&mut ctl, &b, &mut a, 2, DropTarget::Slot(SlotId(0)));
        assert_eq!(
            outcome,
            DropOutcome::Placed {
                tile: TileId(2),
                slot: SlotId(0),
                displaced: None
            }
        );
        assert_eq!(ctl.state(), DragState::Idle);
    }

    #[test]
    fn drop_on_occupied_slot_reports_displaced_tile() {
        let b = board();
        let mut a = SlotAssignment::new(b.len());
        let mut ctl = DragController::new();

        drag(&mut ctl, &b, &mut a, 0, DropTarget::Slot(SlotId(3)));
        let outcome = drag(&mut ctl, &b, &mut a, 1, DropTarget::Slot(SlotId(3)));

        assert_eq!(
            outcome,
            DropOutcome::Placed {
                tile: TileId(1),
                slot: SlotId(3),
                displaced: Some(TileId(0))
            }
        );
        let pool: Vec<_> = b.pool_tiles(&a).map(|t| t.id).collect();
        assert!(pool.contains(&TileId(0)));
        assert!(!pool.contains(&TileId(1)));
    }

    #[test]
    fn drop_on_pool_returns_tile_from_slot() {
        let b = board();
        let mut a = SlotAssignment::new(b.len());
        let mut ctl = DragController::new();

        drag(&mut ctl, &b, &mut a, 4, DropTarget::Slot(SlotId(1)));
        let outcome = drag(&mut ctl, &b, &mut a, 4, DropTarget::Pool);

        assert_eq!(
            outcome,
            DropOutcome::Returned {
                tile: TileId(4),
                from: SlotId(1)
            }
        );
        assert_eq!(a.occupant(SlotId(1)), None);
    }

    #[test]
    fn dropping_on_own_slot_or_pool_is_unchanged() {
        let b = board();
        let mut a = SlotAssignment::new(b.len());
        let mut ctl = DragController::new();

        assert_eq!(drag(&mut ctl, &b, &mut a, 3, DropTarget::Pool), DropOutcome::Unchanged);
        drag(&mut ctl, &b, &mut a, 3, DropTarget::Slot(SlotId(2)));
        assert_eq!(
            drag(&mut ctl, &b, &mut a, 3, DropTarget::Slot(SlotId(2))),
            DropOutcome::Unchanged
        );
        assert_eq!(a.occupant(SlotId(2)), Some(TileId(3)));
    }

    #[test]
    fn drop_without_drag_is_rejected() {
        let mut a = SlotAssignment::new(5);
        let mut ctl = DragController::new();
        assert_eq!(ctl.drop_on(DropTarget::Slot(SlotId(0)), &mut a, false), DropOutcome::Rejected);
        assert_eq!(a.placed_count(), 0);
    }

    #[test]
    fn paused_gestures_change_nothing() {
        let b = board();
        let mut a = SlotAssignment::new(b.len());
        let mut ctl = DragController::new();

        assert!(!ctl.pick_up(TileId(0), &b, true));
        assert_eq!(ctl.state(), DragState::Idle);

        assert!(ctl.pick_up(TileId(0), &b, false));
        assert!(!ctl.set_hover(Some(DropTarget::Pool), true));
        assert_eq!(ctl.drop_on(DropTarget::Slot(SlotId(0)), &mut a, true), DropOutcome::Rejected);
        assert_eq!(ctl.state(), DragState::Dragging(TileId(0)));
        assert_eq!(a.placed_count(), 0);
    }

    #[test]
    fn pick_up_rejects_unknown_tile() {
        let mut ctl = DragController::new();
        assert!(!ctl.pick_up(TileId(0), &Board::empty(), false));
    }

    #[test]
    fn hover_tracks_only_while_dragging() {
        let b = board();
        let mut ctl = DragController::new();
        assert!(!ctl.set_hover(Some(DropTarget::Pool), false));

        ctl.pick_up(TileId(1), &b, false);
        assert!(ctl.set_hover(Some(DropTarget::Slot(SlotId(2))), false));
        assert!(!ctl.set_hover(Some(DropTarget::Slot(SlotId(2))), false));
        assert_eq!(ctl.hover(), Some(DropTarget::Slot(SlotId(2))));

        assert!(ctl.cancel());
        assert_eq!(ctl.hover(), None);
        assert!(!ctl.cancel());
    }

    #[test]
    fn tile_is_never_in_two_slots() {
        let b = board();
        let mut a = SlotAssignment::new(b.len());
        let mut ctl = DragController::new();
        let mut rng = SimpleRng::new(77);

        for _ in 0..500 {
            let tile = rng.next_range(5) as u8;
            let target = match rng.next_range(6) {
                5 => DropTarget::Pool,
                s => DropTarget::Slot(SlotId(s as u8)),
            };
            drag(&mut ctl, &b, &mut a, tile, target);
            assert!(a.is_consistent());
            let in_pool = b.pool_tiles(&a).count();
            assert_eq!(in_pool + a.placed_count(), 5);
        }
    }
}
