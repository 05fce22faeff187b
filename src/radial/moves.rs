//! Move generator: segment transforms over a circular order and the cursor
//! that enumerates them.
//!
//! A segment is `segment_size` consecutive positions starting at `src_idx`,
//! wrapping past the end of the order.

use serde::{Deserialize, Serialize};

/// What a move does to its segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Cut the segment and reinsert it, order preserved, elsewhere.
    Relocate,
    /// Reverse the segment where it stands.
    ReverseInPlace,
    /// Cut the segment, reverse it, and reinsert it elsewhere.
    Pivot,
}

/// One candidate transform, identified by its cursor tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub segment_size: usize,
    pub src_idx: usize,
    pub dest_idx: usize,
    pub reversed: bool,
}

impl Move {
    pub fn new(segment_size: usize, src_idx: usize, dest_idx: usize, reversed: bool) -> Self {
        Self {
            segment_size,
            src_idx,
            dest_idx,
            reversed,
        }
    }

    /// True if circular position `pos` lies inside the segment.
    pub fn covers(&self, pos: usize, n: usize) -> bool {
        (pos + n - self.src_idx % n) % n < self.segment_size
    }

    /// Classify the move for an order of length `n`. None for the no-op case
    /// (destination inside the segment without reversal).
    pub fn kind(&self, n: usize) -> Option<MoveKind> {
        match (self.covers(self.dest_idx, n), self.reversed) {
            (true, false) => None,
            (true, true) => Some(MoveKind::ReverseInPlace),
            (false, false) => Some(MoveKind::Relocate),
            (false, true) => Some(MoveKind::Pivot),
        }
    }

    /// Produce the transformed order. The input is never modified, and the
    /// result is always a permutation of it.
    ///
    /// For relocate and pivot, `dest_idx` is an insertion point in the
    /// remainder (the order with the segment removed), clamped to its end.
    pub fn apply<T: Clone>(&self, order: &[T]) -> Vec<T> {
        let n = order.len();
        if n == 0 || self.segment_size == 0 || self.segment_size >= n {
            return order.to_vec();
        }
        let Some(kind) = self.kind(n) else {
            return order.to_vec();
        };

        let positions: Vec<usize> = (0..self.segment_size)
            .map(|k| (self.src_idx + k) % n)
            .collect();
        let mut segment: Vec<T> = positions.iter().map(|&p| order[p].clone()).collect();

        if kind == MoveKind::ReverseInPlace {
            let mut result = order.to_vec();
            for (&pos, item) in positions.iter().zip(segment.into_iter().rev()) {
                result[pos] = item;
            }
            return result;
        }

        if kind == MoveKind::Pivot {
            segment.reverse();
        }
        let mut result: Vec<T> = order
            .iter()
            .enumerate()
            .filter(|(pos, _)| !self.covers(*pos, n))
            .map(|(_, item)| item.clone())
            .collect();
        let insert_at = self.dest_idx.min(result.len());
        result.splice(insert_at..insert_at, segment);
        result
    }
}

// ─── SearchCursor ────────────────────────────────────────────────────────────

/// Position of the search inside the move space.
///
/// Enumeration order: `segment_size` descending from the maximum, then
/// `src_idx`, then `dest_idx`, then `reversed` (false before true).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCursor {
    pub segment_size: usize,
    pub src_idx: usize,
    pub dest_idx: usize,
    pub reversed: bool,
}

impl SearchCursor {
    /// Top of a fresh epoch.
    pub fn epoch_start(max_segment_size: usize) -> Self {
        Self {
            segment_size: max_segment_size,
            src_idx: 0,
            dest_idx: 0,
            reversed: false,
        }
    }

    pub fn current(&self) -> Move {
        Move::new(self.segment_size, self.src_idx, self.dest_idx, self.reversed)
    }

    /// True once `segment_size` has dropped below 1.
    pub fn is_exhausted(&self) -> bool {
        self.segment_size == 0
    }

    /// Step to the next tuple for an order of length `n`. Returns false when
    /// the whole space has been walked.
    pub fn advance(&mut self, n: usize) -> bool {
        if self.is_exhausted() {
            return false;
        }
        if !self.reversed {
            self.reversed = true;
            return true;
        }
        self.reversed = false;
        self.dest_idx += 1;
        if self.dest_idx < n {
            return true;
        }
        self.dest_idx = 0;
        self.src_idx += 1;
        if self.src_idx < n {
            return true;
        }
        self.src_idx = 0;
        self.segment_size -= 1;
        !self.is_exhausted()
    }
}

/// Every non-no-op move of one full search, in enumeration order.
pub fn enumerate_moves(n: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    if n < 2 {
        return moves;
    }
    let mut cursor = SearchCursor::epoch_start(n / 2);
    loop {
        let mv = cursor.current();
        if mv.kind(n).is_some() {
            moves.push(mv);
        }
        if !cursor.advance(n) {
            break;
        }
    }
    moves
}

#[cfg(test)]
#[path = "../../tests/rust/test_radial_moves.rs"]
mod tests;
