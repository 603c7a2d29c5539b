//! Board module - the pairing surface for one round
//!
//! A board has one definition slot per round entry (in round order) and one
//! keyword tile per entry (in shuffled order). Slot `n` is answered by tile `n`;
//! the answer is kept here and never shown.
//!
//! Which tile sits where is not stored on the board: that is the job of
//! [`SlotAssignment`](crate::drag::SlotAssignment). The pool of unplaced tiles
//! is derived from it on demand.

use std::borrow::Cow;

use arrayvec::ArrayVec;

use crate::drag::{Location, SlotAssignment};
use crate::rng::SimpleRng;
use crate::selector::RoundState;
use crate::types::{SlotId, TileId, ROUND_SIZE};

/// A definition with a drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub definition: Cow<'static, str>,
}

impl Slot {
    /// The tile that correctly matches this definition.
    pub fn answer(&self) -> TileId {
        self.id.answer()
    }

    /// 1-based number shown in front of the definition.
    pub fn number(&self) -> usize {
        self.id.index() + 1
    }
}

/// A draggable keyword label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub keyword: Cow<'static, str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    slots: ArrayVec<Slot, ROUND_SIZE>,
    /// Tiles in dealt (shuffled) order.
    tiles: ArrayVec<Tile, ROUND_SIZE>,
}

impl Board {
    /// Board with no slots and no tiles (before the first round).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lay out a round: definitions in round order, keywords shuffled.
    pub fn deal(round: &RoundState, rng: &mut SimpleRng) -> Self {
        let slots = round
            .iter()
            .enumerate()
            .map(|(i, entry)| Slot {
                id: SlotId(i as u8),
                definition: entry.definition.clone(),
            })
            .collect();

        let mut tiles: ArrayVec<Tile, ROUND_SIZE> = round
            .iter()
            .enumerate()
            .map(|(i, entry)| Tile {
                id: TileId(i as u8),
                keyword: entry.keyword.clone(),
            })
            .collect();
        rng.shuffle(&mut tiles);

        Self { slots, tiles }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Tiles in dealt order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn has_tile(&self, id: TileId) -> bool {
        self.tile(id).is_some()
    }

    /// Tiles not placed in any slot, in dealt order.
    pub fn pool_tiles<'a>(
        &'a self,
        assignment: &'a SlotAssignment,
    ) -> impl Iterator<Item = &'a Tile> + 'a {
        self.tiles
            .iter()
            .filter(move |t| assignment.location_of(t.id) == Location::Pool)
    }
}
