//! Payload types for the FinAura backend.
//!
//! The backend sends untyped JSON; everything is validated once here, at
//! the client boundary, into explicit structs. The dashboard snapshot is
//! read-only on the client and replaced wholesale on re-fetch - nothing
//! ever merges or mutates individual fields.

use serde::{Deserialize, Serialize};

/// One point-in-time copy of the server-provided dashboard data.
///
/// All money and day figures are opaque values taken as-is from the
/// payload. In particular `safe_to_spend` is server-computed and must
/// never be re-derived from `current_balance` and `days_left`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Profile of the signed-in user.
    pub user: UserProfile,

    /// Server-computed daily discretionary limit.
    pub safe_to_spend: f64,

    /// Unused recurring charge flagged by the backend. Presence alone
    /// triggers the subscription alert; `null` or absent suppresses it.
    #[serde(default)]
    pub unused_sub: Option<UnusedSub>,

    /// Roommate ledger, in server order.
    #[serde(default)]
    pub roommates: Vec<Roommate>,

    /// Gig listings, in server order.
    #[serde(default)]
    pub gigs: Vec<Gig>,

    /// Peer-benchmark percentiles. Not sent by any current backend; when
    /// present the client renders the values verbatim, never recomputing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_benchmark: Option<Vec<PeerStat>>,
}

/// User profile carried inside the dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,

    /// Spending-personality label assigned by the backend (e.g. "Saver").
    pub spending_dna: String,

    /// Current mood label. The exact value `"Stressed"` (case-sensitive)
    /// triggers the mood alert; anything else suppresses it.
    pub mood: String,

    pub current_balance: f64,

    /// Days remaining in the budgeting period.
    pub days_left: u32,
}

impl UserProfile {
    /// Whether the mood alert should be shown for this profile.
    pub fn is_stressed(&self) -> bool {
        self.mood == "Stressed"
    }
}

/// A recurring subscription the backend flagged as unused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnusedSub {
    pub name: String,
    pub cost: f64,
}

/// Direction of a roommate ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoommateKind {
    /// They owe you - displayed as a positive amount.
    OweYou,
    /// You owe them - displayed as a negative amount.
    YouOwe,
}

/// One row of the roommate ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roommate {
    pub id: i64,
    pub name: String,
    pub reason: String,
    #[serde(rename = "type")]
    pub kind: RoommateKind,
    pub amount: f64,
}

impl Roommate {
    /// Whether this entry is money coming to the user.
    pub fn is_owed_to_you(&self) -> bool {
        self.kind == RoommateKind::OweYou
    }
}

/// One gig listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gig {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub time: String,
    pub pay: f64,
}

/// One peer-benchmark row, rendered verbatim when supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerStat {
    /// Spending category label (e.g. "Food", "Subscriptions").
    pub label: String,
    /// The user's share, in percent.
    pub you: f64,
    /// The peer-group share, in percent.
    pub peers: f64,
}

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body for `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}
