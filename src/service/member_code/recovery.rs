//! Seeds the counter from codes that are already persisted.

use chrono::NaiveDate;

use crate::service::member_code::{format, store::MemberCodeStore};

/// Computes the first sequence value that is safe to hand out on `today`.
///
/// Scans every persisted code for the day and returns one above the highest valid
/// sequence, or 1 when there are none. A failing store also yields 1: the existence
/// check in the generator still catches collisions, this only saves retries.
/// Malformed codes are skipped.
///
/// # Arguments
/// - `store` - Record store holding persisted member codes
/// - `today` - Day to recover the counter for
///
/// # Returns
/// - `u16` - Next sequence value to allocate for `today`
pub async fn recover_next_sequence<S>(store: &S, today: NaiveDate) -> u16
where
    S: MemberCodeStore + ?Sized,
{
    let prefix = format::prefix(today);

    let codes = match store.find_codes_by_prefix(&prefix).await {
        Ok(codes) => codes,
        Err(e) => {
            tracing::warn!(
                "Failed to recover member code counter for {}, starting at 1: {}",
                prefix,
                e
            );
            return 1;
        }
    };

    let highest = codes
        .iter()
        .filter_map(|code| match format::parse_sequence(code, today) {
            Ok(sequence) => Some(sequence),
            Err(e) => {
                tracing::warn!("Skipping malformed member code during recovery: {}", e);
                None
            }
        })
        .max()
        .unwrap_or(0);

    highest.saturating_add(1)
}
