//! Demo dataset for the console.
//!
//! Seeding is explicit: embedding callers and tests that want a populated
//! console call [`seed_demo_data`] once on a fresh state. The dataset
//! covers every review status, scan source, and ticket state so each tab
//! has something to show.

use crate::record::{
    BrandProfile, Campaign, CampaignStatus, Product, ProductStatus, PurchaseSource, RewardKind,
    RewardStatus, ScanSource, Submission, SubmissionId, Ticket, TicketPriority, TicketStatus,
};
use crate::state::ConsoleState;

// =============================================================================
// SEED
// =============================================================================

/// Populate an empty console with the demo dataset. Counts one mutation:
/// the version is bumped once and no events are broadcast.
pub async fn seed_demo_data(state: &ConsoleState) {
    let mut inner = state.inner.write().await;

    inner.submissions = demo_submissions();
    inner.products = demo_products();
    inner.campaigns = demo_campaigns();
    inner.tickets = demo_tickets();
    inner.profile = BrandProfile {
        brand_name: "Vana Naturals".into(),
        support_email: "care@vananaturals.example".into(),
        default_reward_kind: RewardKind::Discount,
        default_reward_value: 20.0,
    };

    inner.next_submission_seq = 13;
    inner.next_campaign_seq = 4;
    inner.next_ticket_seq = 4;
    inner.version += 1;
}

// =============================================================================
// DATASETS
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn submission(
    seq: u32,
    name: &str,
    mobile: &str,
    email: &str,
    source: PurchaseSource,
    product: (&str, &str),
    amount: Option<f64>,
    scan: ScanSource,
    location: &str,
    campaign: Option<&str>,
    ts: i64,
) -> Submission {
    Submission {
        id: SubmissionId(format!("SUB-{seq:03}")),
        customer_name: name.into(),
        mobile_number: mobile.into(),
        email: email.into(),
        purchase_source: source,
        product_scanned: product.1.into(),
        product_id: product.0.into(),
        invoice_amount: amount,
        invoice_upload: amount.map(|_| format!("uploads/inv-{seq:03}.jpg")),
        scan_source: scan,
        reward_status: RewardStatus::Pending,
        reward_sent: None,
        approval_comment: None,
        rejection_reason: None,
        submitted_ts: ts,
        location: Some(location.into()),
        campaign_id: campaign.map(str::to_string),
    }
}

fn approved(mut sub: Submission, comment: &str) -> Submission {
    sub.reward_status = RewardStatus::Approved;
    sub.reward_sent = Some("REWARD20OFF".into());
    sub.approval_comment = Some(comment.into());
    sub
}

fn rejected(mut sub: Submission, reason: &str) -> Submission {
    sub.reward_status = RewardStatus::Rejected;
    sub.rejection_reason = Some(reason.into());
    sub
}

fn demo_submissions() -> Vec<Submission> {
    let shampoo = ("PRD-14", "Herbal Shampoo 200ml");
    let face_wash = ("PRD-15", "Aloe Face Wash 100ml");
    let soap = ("PRD-09", "Charcoal Soap 75g");
    let oil = ("PRD-21", "Cold-Pressed Coconut Oil 500ml");
    let base_ts = 1_736_940_600_000;

    vec![
        approved(
            submission(1, "Rohan Mehta", "+91 98200 12345", "rohan.mehta@example.com",
                PurchaseSource::Amazon, shampoo, Some(349.0), ScanSource::QrCode,
                "Mumbai", Some("CMP-001"), base_ts),
            "invoice matches order",
        ),
        submission(2, "Priya Shah", "+91 98111 22334", "priya.shah@example.com",
            PurchaseSource::Flipkart, face_wash, Some(199.0), ScanSource::QrCode,
            "Ahmedabad", Some("CMP-001"), base_ts + 3_600_000),
        rejected(
            submission(3, "Amit Verma", "+91 99887 76655", "amit.v@example.com",
                PurchaseSource::RetailStore, soap, None, ScanSource::Barcode,
                "Delhi", None, base_ts + 7_200_000),
            "no invoice attached",
        ),
        submission(4, "Neha Kulkarni", "+91 98765 43210", "neha.kulkarni@example.com",
            PurchaseSource::BrandWebsite, oil, Some(549.0), ScanSource::ManualEntry,
            "Pune", Some("CMP-002"), base_ts + 10_800_000),
        approved(
            submission(5, "Sandeep Rao", "+91 90000 11223", "sandeep.rao@example.com",
                PurchaseSource::Amazon, oil, Some(549.0), ScanSource::QrCode,
                "Bengaluru", Some("CMP-002"), base_ts + 14_400_000),
            "repeat customer",
        ),
        submission(6, "Kavya Nair", "+91 97654 32109", "kavya.n@example.com",
            PurchaseSource::Other("Kirana store".into()), soap, Some(45.0), ScanSource::Barcode,
            "Kochi", None, base_ts + 18_000_000),
        rejected(
            submission(7, "Rohan Mehta", "+91 98200 12345", "rohan.mehta@example.com",
                PurchaseSource::Amazon, face_wash, Some(199.0), ScanSource::QrCode,
                "Mumbai", Some("CMP-001"), base_ts + 21_600_000),
            "duplicate invoice",
        ),
        submission(8, "Isha Malhotra", "+91 98220 00456", "isha.malhotra@example.com",
            PurchaseSource::Flipkart, shampoo, Some(349.0), ScanSource::QrCode,
            "Jaipur", Some("CMP-001"), base_ts + 25_200_000),
        approved(
            submission(9, "Vikram Singh", "+91 98989 12121", "vikram.singh@example.com",
                PurchaseSource::RetailStore, shampoo, Some(349.0), ScanSource::Barcode,
                "Chandigarh", None, base_ts + 28_800_000),
            "",
        ),
        submission(10, "Ananya Iyer", "+91 96543 21098", "ananya.iyer@example.com",
            PurchaseSource::BrandWebsite, face_wash, Some(199.0), ScanSource::ManualEntry,
            "Chennai", Some("CMP-002"), base_ts + 32_400_000),
        submission(11, "Farhan Khan", "+91 95555 67890", "farhan.k@example.com",
            PurchaseSource::Amazon, oil, None, ScanSource::QrCode,
            "Hyderabad", Some("CMP-002"), base_ts + 36_000_000),
        rejected(
            submission(12, "Meera Joshi", "+91 94444 55667", "meera.joshi@example.com",
                PurchaseSource::Other("Wholesale market".into()), soap, Some(45.0), ScanSource::ManualEntry,
                "Nagpur", None, base_ts + 39_600_000),
            "product not part of campaign",
        ),
    ]
}

fn demo_products() -> Vec<Product> {
    vec![
        Product {
            sku: "PRD-14".into(),
            name: "Herbal Shampoo 200ml".into(),
            category: "Hair care".into(),
            status: ProductStatus::Active,
            unit_price: 349.0,
        },
        Product {
            sku: "PRD-15".into(),
            name: "Aloe Face Wash 100ml".into(),
            category: "Skin care".into(),
            status: ProductStatus::Active,
            unit_price: 199.0,
        },
        Product {
            sku: "PRD-21".into(),
            name: "Cold-Pressed Coconut Oil 500ml".into(),
            category: "Wellness".into(),
            status: ProductStatus::Active,
            unit_price: 549.0,
        },
        Product {
            sku: "PRD-09".into(),
            name: "Charcoal Soap 75g".into(),
            category: "Skin care".into(),
            status: ProductStatus::Discontinued,
            unit_price: 45.0,
        },
    ]
}

fn demo_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "CMP-001".into(),
            name: "Scan & Win Monsoon".into(),
            audiences: vec!["Repeat buyers".into(), "Metro cities".into()],
            is_paid: true,
            reward_kind: RewardKind::Discount,
            reward_value: 20.0,
            status: CampaignStatus::Active,
            created_ts: 1_735_689_000_000,
        },
        Campaign {
            id: "CMP-002".into(),
            name: "Wellness Week Cashback".into(),
            audiences: vec!["First-time buyers".into()],
            is_paid: false,
            reward_kind: RewardKind::Cashback,
            reward_value: 50.0,
            status: CampaignStatus::Active,
            created_ts: 1_736_293_800_000,
        },
        Campaign {
            id: "CMP-003".into(),
            name: "Festive Sampler".into(),
            audiences: vec!["Lapsed buyers".into()],
            is_paid: true,
            reward_kind: RewardKind::FreeProduct,
            reward_value: 1.0,
            status: CampaignStatus::Draft,
            created_ts: 1_736_898_600_000,
        },
    ]
}

fn demo_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "TKT-001".into(),
            subject: "Reward code not received".into(),
            customer_name: "Priya Shah".into(),
            priority: TicketPriority::High,
            status: TicketStatus::Open,
            opened_ts: 1_736_944_200_000,
        },
        Ticket {
            id: "TKT-002".into(),
            subject: "QR sticker unreadable".into(),
            customer_name: "Amit Verma".into(),
            priority: TicketPriority::Medium,
            status: TicketStatus::InProgress,
            opened_ts: 1_736_947_800_000,
        },
        Ticket {
            id: "TKT-003".into(),
            subject: "Update registered mobile number".into(),
            customer_name: "Kavya Nair".into(),
            priority: TicketPriority::Low,
            status: TicketStatus::Resolved,
            opened_ts: 1_736_951_400_000,
        },
    ]
}

// =============================================================================
// TESTS
// =============================================================================
