//! Day-scoped sequence counter.

use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{error::member_code::MemberCodeError, service::member_code::format::MAX_SEQUENCE};

/// Counter state guarded by the store's mutex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CounterState {
    /// Day the counter was last reset or seeded for. `None` until first use.
    current_day: Option<NaiveDate>,
    /// Next value to hand out for `current_day`.
    next_sequence: u16,
}

/// Hands out strictly increasing sequence values scoped to one calendar day.
///
/// Clones share the same counter. The compare, reset, and increment steps all run
/// inside one critical section, so concurrent callers never observe the same value
/// for the same day. The counter never wraps: once 9999 has been handed out for a
/// day, further allocations fail with `SequenceExhausted`.
#[derive(Clone)]
pub struct SequenceStore {
    state: Arc<Mutex<CounterState>>,
}

impl SequenceStore {
    /// Creates an unseeded counter. The first allocation for any day returns 1.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(CounterState {
                current_day: None,
                next_sequence: 1,
            })),
        }
    }

    /// Allocates the next sequence value for `today`.
    ///
    /// Resets the counter to 1 when `today` is later than the day the counter was
    /// last used for, then returns the pre-increment value. A `today` earlier than
    /// the counter's day comes from a caller that read the clock before a rollover;
    /// the counter never moves back, so that caller is allocated on the counter's
    /// day instead.
    ///
    /// # Arguments
    /// - `today` - Calendar day the caller wants a value for
    ///
    /// # Returns
    /// - `Ok((NaiveDate, u16))` - Day the value belongs to and the value in `1..=9999`
    /// - `Err(MemberCodeError::SequenceExhausted)` - All values for that day are used
    pub async fn next(&self, today: NaiveDate) -> Result<(NaiveDate, u16), MemberCodeError> {
        let mut state = self.state.lock().await;

        let day = match state.current_day {
            Some(current) if current >= today => current,
            _ => {
                state.current_day = Some(today);
                state.next_sequence = 1;
                today
            }
        };

        let sequence = state.next_sequence;
        if sequence > MAX_SEQUENCE {
            return Err(MemberCodeError::SequenceExhausted { day });
        }

        state.next_sequence = sequence + 1;
        Ok((day, sequence))
    }

    /// Returns true when the counter has not been used yet or is on a day before
    /// `today`.
    pub async fn is_behind(&self, today: NaiveDate) -> bool {
        match self.state.lock().await.current_day {
            Some(current) => current < today,
            None => true,
        }
    }

    /// Moves the counter for `today` up to at least `next_sequence`.
    ///
    /// A counter already on `today` is never lowered, so values handed out before a
    /// reseed are not handed out again. A counter on an earlier day is switched to
    /// `today` and set to `next_sequence`. A counter already past `today` is left
    /// alone.
    pub async fn seed(&self, today: NaiveDate, next_sequence: u16) {
        let mut state = self.state.lock().await;

        match state.current_day {
            Some(current) if current == today => {
                state.next_sequence = state.next_sequence.max(next_sequence);
            }
            Some(current) if current > today => {}
            _ => {
                state.current_day = Some(today);
                state.next_sequence = next_sequence.max(1);
            }
        }
    }

    /// Returns `(current_day, next_sequence)`.
    pub async fn snapshot(&self) -> (Option<NaiveDate>, u16) {
        let state = self.state.lock().await;
        (state.current_day, state.next_sequence)
    }
}

impl Default for SequenceStore {
    fn default() -> Self {
        Self::new()
    }
}
