//! Day/block progression engine for the live-trip flow.
//!
//! The pointer moves strictly forward through morning → afternoon → evening →
//! next-day morning. Advancement past a block is gated on the server's
//! mark-complete acknowledgement: callers perform the remote write first and
//! feed its outcome in, so a failed write never skips a block.

use serde::{Deserialize, Serialize};

use crate::resolver::Destination;
use crate::snapshot::{BlockName, ProgressPointer};

/// Result of moving the pointer one block forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// More blocks remain today.
    NextBlock(ProgressPointer),
    /// Evening just ended on a non-final day. The reflection screen is owed
    /// before the carried pointer (next day, morning) is persisted.
    DayComplete(ProgressPointer),
    /// Evening of the final day ended; no pointer past the trip is persisted.
    TripComplete,
}

/// Outcome of the server-side mark-complete call for the current block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Confirmed,
    Rejected,
}

/// Pointer plus destination returned by [`complete_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCompletion {
    pub pointer: ProgressPointer,
    pub destination: Destination,
}

/// Move the pointer one block forward through the fixed three-block cycle.
#[must_use]
pub fn advance(pointer: ProgressPointer, total_days: u32) -> Advance {
    match pointer.block.next() {
        Some(block) => Advance::NextBlock(ProgressPointer {
            day_index: pointer.day_index,
            block,
        }),
        None if pointer.day_index >= total_days => Advance::TripComplete,
        None => Advance::DayComplete(ProgressPointer::at_day(pointer.day_index + 1)),
    }
}

/// Decide how to enter the current day.
///
/// A pointer still at morning gets the full day overview; a pointer that
/// already moved past morning resumes straight into the in-progress block.
/// Progress is never silently reset here; only the explicit pick-a-day
/// override rewinds a pointer.
#[must_use]
pub const fn start_day(pointer: ProgressPointer) -> Destination {
    match pointer.block {
        BlockName::Morning => Destination::DayOverview,
        BlockName::Afternoon | BlockName::Evening => Destination::LiveDayBlock,
    }
}

/// Apply a block completion, honoring the remote-confirmation gate.
///
/// On [`WriteOutcome::Rejected`] the input pointer comes back unchanged and
/// the destination stays on the current block, so the next attempt re-marks
/// the same block instead of skipping it.
#[must_use]
pub fn complete_block(
    pointer: ProgressPointer,
    total_days: u32,
    write: WriteOutcome,
) -> BlockCompletion {
    if write == WriteOutcome::Rejected {
        return BlockCompletion {
            pointer,
            destination: Destination::LiveDayBlock,
        };
    }
    match advance(pointer, total_days) {
        Advance::NextBlock(next) => BlockCompletion {
            pointer: next,
            destination: Destination::LiveDayBlock,
        },
        Advance::DayComplete(next) => BlockCompletion {
            pointer: next,
            destination: Destination::DayReflection,
        },
        Advance::TripComplete => BlockCompletion {
            pointer,
            destination: Destination::TripComplete,
        },
    }
}

/// Explicit user override: restart the given day from its morning block.
///
/// Valid only for `1 ≤ day_index ≤ total_days`. Out-of-range input is a
/// caller contract violation, not a recoverable state; callers (the pick-a-day
/// screen) are responsible for offering only valid days.
#[must_use]
pub fn pick_day(day_index: u32, total_days: u32) -> ProgressPointer {
    debug_assert!(
        day_index >= 1 && day_index <= total_days,
        "pick_day({day_index}) outside 1..={total_days}"
    );
    ProgressPointer::at_day(day_index)
}
