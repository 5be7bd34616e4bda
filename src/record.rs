//! Domain records for the brand console.
//!
//! DESIGN
//! ======
//! A `Submission` is one consumer's purchase-verification attempt. Contact
//! and purchase fields are immutable once submitted; the review block
//! (`reward_status`, `reward_sent`, `approval_comment`, `rejection_reason`)
//! is the only part that changes after creation, and only through the
//! submission service. At most one of comment/reason is populated, and it
//! must agree with the status.
//!
//! The supporting records (products, campaigns, tickets, brand profile) back
//! the console's other tabs. They are plain serde structs; all lifecycle
//! rules live in their services.

use serde::{Deserialize, Serialize};

// =============================================================================
// IDS
// =============================================================================

/// Stable human-facing submission id (`SUB-001` style). Assigned at
/// creation, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubmissionId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

// =============================================================================
// REVIEW ENUMS
// =============================================================================

/// Tri-state outcome of human review. Every submission starts `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardStatus {
    Pending,
    Approved,
    Rejected,
}

/// How the consumer initiated the submission. Set once, never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSource {
    QrCode,
    Barcode,
    ManualEntry,
}

/// Retail channel the purchase came from. Known channels are closed
/// variants; anything else travels through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseSource {
    Amazon,
    Flipkart,
    RetailStore,
    BrandWebsite,
    Other(String),
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// One consumer purchase-verification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub customer_name: String,
    pub mobile_number: String,
    pub email: String,
    pub purchase_source: PurchaseSource,
    pub product_scanned: String,
    pub product_id: String,
    /// Invoice total as entered by the consumer, if any.
    pub invoice_amount: Option<f64>,
    /// Opaque reference to an uploaded proof file. `None` means no proof
    /// was attached.
    pub invoice_upload: Option<String>,
    pub scan_source: ScanSource,
    pub reward_status: RewardStatus,
    /// Reward code sent to the consumer. Populated only when approved.
    pub reward_sent: Option<String>,
    pub approval_comment: Option<String>,
    pub rejection_reason: Option<String>,
    /// Milliseconds since the Unix epoch. Immutable.
    pub submitted_ts: i64,
    pub location: Option<String>,
    pub campaign_id: Option<String>,
}

impl Submission {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.reward_status == RewardStatus::Pending
    }

    /// Whether the review block agrees with the status: pending carries
    /// nothing, approved never carries a rejection reason, rejected never
    /// carries a comment or a reward.
    #[must_use]
    pub fn review_fields_consistent(&self) -> bool {
        match self.reward_status {
            RewardStatus::Pending => {
                self.reward_sent.is_none()
                    && self.approval_comment.is_none()
                    && self.rejection_reason.is_none()
            }
            RewardStatus::Approved => self.rejection_reason.is_none(),
            RewardStatus::Rejected => {
                self.reward_sent.is_none() && self.approval_comment.is_none()
            }
        }
    }
}

/// Fields supplied by the outside world when a submission arrives. The
/// store assigns identity, timestamp, and the initial review state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub customer_name: String,
    pub mobile_number: String,
    pub email: String,
    pub purchase_source: PurchaseSource,
    pub product_scanned: String,
    pub product_id: String,
    pub invoice_amount: Option<f64>,
    pub invoice_upload: Option<String>,
    pub scan_source: ScanSource,
    pub location: Option<String>,
    pub campaign_id: Option<String>,
}

// =============================================================================
// CATALOG / CAMPAIGNS / SUPPORT / SETTINGS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Discontinued,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub status: ProductStatus,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Discount,
    Cashback,
    FreeProduct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Ended,
}

/// A QR/reward campaign. Reward configuration here describes what the
/// campaign promises; the approve flow sends the console-wide configured
/// code instead of consulting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub audiences: Vec<String>,
    pub is_paid: bool,
    pub reward_kind: RewardKind,
    pub reward_value: f64,
    pub status: CampaignStatus,
    /// Milliseconds since the Unix epoch.
    pub created_ts: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub customer_name: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    /// Milliseconds since the Unix epoch.
    pub opened_ts: i64,
}

/// Console-wide brand settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    pub brand_name: String,
    pub support_email: String,
    pub default_reward_kind: RewardKind,
    pub default_reward_value: f64,
}

impl Default for BrandProfile {
    fn default() -> Self {
        Self {
            brand_name: "Acme Consumer Brands".into(),
            support_email: "support@acme.example".into(),
            default_reward_kind: RewardKind::Discount,
            default_reward_value: 20.0,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn base_submission() -> Submission {
        Submission {
            id: SubmissionId::from("SUB-001"),
            customer_name: "Rohan Mehta".into(),
            mobile_number: "+91 98200 12345".into(),
            email: "rohan.mehta@example.com".into(),
            purchase_source: PurchaseSource::Amazon,
            product_scanned: "Herbal Shampoo 200ml".into(),
            product_id: "PRD-14".into(),
            invoice_amount: Some(349.0),
            invoice_upload: Some("uploads/inv-001.jpg".into()),
            scan_source: ScanSource::QrCode,
            reward_status: RewardStatus::Pending,
            reward_sent: None,
            approval_comment: None,
            rejection_reason: None,
            submitted_ts: 1_736_940_600_000,
            location: Some("Mumbai".into()),
            campaign_id: Some("CMP-001".into()),
        }
    }

    #[test]
    fn pending_submission_is_consistent() {
        let sub = base_submission();
        assert!(sub.is_pending());
        assert!(sub.review_fields_consistent());
    }

    #[test]
    fn approved_with_lingering_reason_is_inconsistent() {
        let mut sub = base_submission();
        sub.reward_status = RewardStatus::Approved;
        sub.reward_sent = Some("REWARD20OFF".into());
        sub.rejection_reason = Some("stale".into());
        assert!(!sub.review_fields_consistent());
    }

    #[test]
    fn rejected_with_reward_is_inconsistent() {
        let mut sub = base_submission();
        sub.reward_status = RewardStatus::Rejected;
        sub.rejection_reason = Some("invoice unreadable".into());
        sub.reward_sent = Some("REWARD20OFF".into());
        assert!(!sub.review_fields_consistent());
    }

    #[test]
    fn pending_with_comment_is_inconsistent() {
        let mut sub = base_submission();
        sub.approval_comment = Some("early".into());
        assert!(!sub.review_fields_consistent());
    }

    #[test]
    fn submission_json_round_trip() {
        let sub = base_submission();
        let json = serde_json::to_string(&sub).expect("serialize");
        let restored: Submission = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, sub);
    }

    #[test]
    fn purchase_source_other_round_trips() {
        let src = PurchaseSource::Other("Kirana store".into());
        let json = serde_json::to_string(&src).unwrap();
        let restored: PurchaseSource = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, src);
    }

    #[test]
    fn reward_status_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&RewardStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&ScanSource::QrCode).unwrap(), "\"qr_code\"");
    }

    #[test]
    fn submission_id_display() {
        let id = SubmissionId::from("SUB-042");
        assert_eq!(id.to_string(), "SUB-042");
        assert_eq!(id.as_str(), "SUB-042");
    }
}
