//! Member code generator.
//!
//! Produces unique, sortable member codes of the form `M<YYYYMMDD><sequence>`
//! (e.g. `M202404070001`). Three layers keep codes unique:
//!
//! - **Sequence** (`sequence`) - in-process counter, reset per calendar day
//! - **Recovery** (`recovery`) - seeds the counter above persisted codes on startup
//!   and on day rollover
//! - **Existence check** (this module) - each candidate is checked against the
//!   record store and skipped when taken
//!
//! The check and the later insert are not atomic, so another process can still
//! claim a code in between. The unique index on `member.member_code` is the final
//! authority and the member service retries on a violation.

pub mod clock;
pub mod format;
pub mod recovery;
pub mod sequence;
pub mod store;

use chrono::NaiveDate;

use crate::{
    error::member_code::MemberCodeError,
    service::member_code::{
        clock::{Clock, LocalClock},
        sequence::SequenceStore,
        store::MemberCodeStore,
    },
};

/// Allocates member codes for newly created members.
///
/// Clones share the same counter, so one generator can be built at startup and
/// handed to every request.
#[derive(Clone)]
pub struct MemberCodeGenerator<S, C = LocalClock> {
    store: S,
    clock: C,
    sequence: SequenceStore,
    max_retries: u32,
}

impl<S, C> MemberCodeGenerator<S, C>
where
    S: MemberCodeStore,
    C: Clock,
{
    /// Creates a generator without consulting the store.
    ///
    /// The counter is recovered lazily on the first call to `generate_unique`.
    /// Use `init` to recover eagerly.
    ///
    /// # Arguments
    /// - `store` - Record store holding persisted member codes
    /// - `clock` - Source of the calendar day
    /// - `max_retries` - Candidates tried per request before giving up (minimum 1)
    pub fn new(store: S, clock: C, max_retries: u32) -> Self {
        Self {
            store,
            clock,
            sequence: SequenceStore::new(),
            max_retries: max_retries.max(1),
        }
    }

    /// Creates a generator and recovers its counter from the store.
    pub async fn init(store: S, clock: C, max_retries: u32) -> Self {
        let generator = Self::new(store, clock, max_retries);
        generator.reinitialize().await;
        generator
    }

    /// Re-seeds the counter for today from the store.
    ///
    /// Never lowers a counter that is already on today.
    pub async fn reinitialize(&self) {
        self.recover(self.clock.today()).await;
    }

    /// Number of candidates tried per request.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns `(current_day, next_sequence)` of the counter.
    pub async fn counter(&self) -> (Option<NaiveDate>, u16) {
        self.sequence.snapshot().await
    }

    /// Generates a member code that no persisted member currently holds.
    ///
    /// Recovers the counter first when the day has changed since the last call.
    /// Every candidate consumes a sequence value, taken or not.
    ///
    /// # Returns
    /// - `Ok(String)` - Free member code
    /// - `Err(MemberCodeError::CodeGenerationExhausted)` - Every candidate was taken
    /// - `Err(MemberCodeError::SequenceExhausted)` - No sequence values left today
    /// - `Err(MemberCodeError::Store)` - Existence check failed
    pub async fn generate_unique(&self) -> Result<String, MemberCodeError> {
        let (code, _) = self.generate_dated().await?;
        Ok(code)
    }

    /// Generates a member code together with the day its date segment encodes.
    ///
    /// The clock is read once per candidate. A caller that read the day just before
    /// midnight is served from the counter's newer day, so the returned day is the
    /// one to record as the member's join date.
    ///
    /// # Returns
    /// - `Ok((String, NaiveDate))` - Free member code and its day
    /// - `Err(MemberCodeError)` - Same failures as `generate_unique`
    pub async fn generate_dated(&self) -> Result<(String, NaiveDate), MemberCodeError> {
        for _ in 0..self.max_retries {
            let today = self.clock.today();

            if self.sequence.is_behind(today).await {
                self.recover(today).await;
            }

            let (day, sequence) = self.sequence.next(today).await?;
            let code = format::format(day, sequence);

            if !self.store.exists_by_code(&code).await? {
                tracing::debug!("Allocated member code {}", code);
                return Ok((code, day));
            }

            tracing::warn!("Member code {} already exists, trying next", code);
        }

        Err(MemberCodeError::CodeGenerationExhausted {
            attempts: self.max_retries,
        })
    }

    async fn recover(&self, today: NaiveDate) {
        let next_sequence = recovery::recover_next_sequence(&self.store, today).await;
        self.sequence.seed(today, next_sequence).await;

        let (_, next) = self.sequence.snapshot().await;
        tracing::info!(
            "Member code generator seeded at {} for {}",
            next,
            format::day_key(today)
        );
    }
}
