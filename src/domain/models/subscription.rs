use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::plan::{BillingPeriod, PlanTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    PendingPayment,
    Expired,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::PendingPayment => "pending_payment",
            SubscriptionStatus::Expired => "expired",
            SubscriptionStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(SubscriptionStatus::Active),
            "pending_payment" => Some(SubscriptionStatus::PendingPayment),
            "expired" => Some(SubscriptionStatus::Expired),
            "cancelled" => Some(SubscriptionStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub artist_id: Uuid,
    pub plan: PlanTier,
    pub billing_period: BillingPeriod,
    pub status: SubscriptionStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    pub id: Uuid,
    pub artist_id: Uuid,
    pub plan: PlanTier,
    pub billing_period: BillingPeriod,
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
}
