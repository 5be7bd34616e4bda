//! Consumer roster — submissions grouped per consumer.
//!
//! One row per distinct mobile number, in order of first appearance.
//! Contact fields are masked like the list view; the name shown is the
//! one from the consumer's most recent submission.

use crate::mask::{mask_email, mask_mobile};
use crate::record::RewardStatus;
use crate::state::ConsoleState;

// =============================================================================
// TYPES
// =============================================================================

/// Aggregated view of one consumer across all their submissions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ConsumerProfile {
    pub customer_name: String,
    pub mobile_masked: String,
    pub email_masked: String,
    pub total_submissions: usize,
    pub approved_count: usize,
    /// Most recent `submitted_ts` across the consumer's submissions.
    pub last_activity_ts: i64,
}

// =============================================================================
// ROSTER
// =============================================================================

/// Group submissions by mobile number into consumer rows. Order of first
/// appearance in the store is preserved.
pub async fn consumer_roster(state: &ConsoleState) -> Vec<ConsumerProfile> {
    let inner = state.inner.read().await;

    let mut keys: Vec<String> = Vec::new();
    let mut profiles: Vec<ConsumerProfile> = Vec::new();

    for sub in &inner.submissions {
        let approved = usize::from(sub.reward_status == RewardStatus::Approved);
        match keys.iter().position(|k| k == &sub.mobile_number) {
            Some(pos) => {
                let profile = &mut profiles[pos];
                profile.total_submissions += 1;
                profile.approved_count += approved;
                if sub.submitted_ts >= profile.last_activity_ts {
                    profile.last_activity_ts = sub.submitted_ts;
                    profile.customer_name = sub.customer_name.clone();
                }
            }
            None => {
                keys.push(sub.mobile_number.clone());
                profiles.push(ConsumerProfile {
                    customer_name: sub.customer_name.clone(),
                    mobile_masked: mask_mobile(&sub.mobile_number),
                    email_masked: mask_email(&sub.email),
                    total_submissions: 1,
                    approved_count: approved,
                    last_activity_ts: sub.submitted_ts,
                });
            }
        }
    }

    profiles
}

// =============================================================================
// TESTS
// =============================================================================
