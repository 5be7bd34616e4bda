//! Campaign service — drafting and launching QR/reward campaigns.
//!
//! The campaign's reward configuration describes what the campaign
//! promises to consumers. The approve flow sends the console-wide reward
//! code and does not consult it.

use tracing::info;

use crate::event::EventKind;
use crate::record::{Campaign, CampaignStatus, RewardKind};
use crate::state::ConsoleState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("campaign not found: {0}")]
    NotFound(String),
    #[error("campaign name is empty")]
    EmptyName,
    #[error("campaign {id} is {status:?}, only drafts launch")]
    NotDraft { id: String, status: CampaignStatus },
    #[error("no pending campaign handoff")]
    NoPendingHandoff,
}

impl crate::event::ErrorCode for CampaignError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_CAMPAIGN_NOT_FOUND",
            Self::EmptyName => "E_CAMPAIGN_EMPTY_NAME",
            Self::NotDraft { .. } => "E_CAMPAIGN_NOT_DRAFT",
            Self::NoPendingHandoff => "E_CAMPAIGN_NO_PENDING_HANDOFF",
        }
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// Create a draft campaign.
///
/// # Errors
///
/// Returns `EmptyName` if the name is blank.
pub async fn draft(
    state: &ConsoleState,
    name: impl Into<String>,
    audiences: Vec<String>,
    is_paid: bool,
    reward_kind: RewardKind,
    reward_value: f64,
) -> Result<Campaign, CampaignError> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(CampaignError::EmptyName);
    }

    let campaign = {
        let mut inner = state.inner.write().await;
        let campaign = Campaign {
            id: inner.next_campaign_id(),
            name,
            audiences,
            is_paid,
            reward_kind,
            reward_value,
            status: CampaignStatus::Draft,
            created_ts: crate::event::now_ms(),
        };
        inner.campaigns.push(campaign.clone());
        inner.version += 1;
        campaign
    };

    info!(id = %campaign.id, "campaign drafted");
    state
        .publish(EventKind::CampaignDrafted { campaign_id: campaign.id.clone() })
        .await;
    Ok(campaign)
}

/// Create a draft campaign from the staged handoff, consuming the slot.
///
/// # Errors
///
/// Returns `NoPendingHandoff` if the slot is empty or expired.
pub async fn launch_from_handoff(
    state: &ConsoleState,
    name: impl Into<String>,
    reward_kind: RewardKind,
    reward_value: f64,
) -> Result<Campaign, CampaignError> {
    let pending = state.handoff.take().ok_or(CampaignError::NoPendingHandoff)?;
    draft(state, name, pending.audiences, pending.is_paid, reward_kind, reward_value).await
}

// =============================================================================
// LAUNCH
// =============================================================================

/// Activate a draft campaign.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, `NotDraft` if the campaign has
/// already been launched or ended.
pub async fn launch(state: &ConsoleState, id: &str) -> Result<Campaign, CampaignError> {
    let updated = {
        let mut inner = state.inner.write().await;
        let pos = inner
            .campaigns
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CampaignError::NotFound(id.to_string()))?;

        let campaign = &mut inner.campaigns[pos];
        if campaign.status != CampaignStatus::Draft {
            return Err(CampaignError::NotDraft { id: id.to_string(), status: campaign.status });
        }
        campaign.status = CampaignStatus::Active;
        let updated = campaign.clone();
        inner.version += 1;
        updated
    };

    info!(id = %updated.id, "campaign launched");
    state
        .publish(EventKind::CampaignLaunched { campaign_id: updated.id.clone() })
        .await;
    Ok(updated)
}

// =============================================================================
// READ SIDE
// =============================================================================

/// All campaigns in creation order.
pub async fn list(state: &ConsoleState) -> Vec<Campaign> {
    let inner = state.inner.read().await;
    inner.campaigns.clone()
}

// =============================================================================
// TESTS
// =============================================================================
