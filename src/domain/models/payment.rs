use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::plan::{BillingPeriod, PlanTier};
use crate::domain::models::registration::FileUpload;

pub const CURRENCY_CLP: &str = "CLP";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    MercadoPago,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::MercadoPago => "mercado_pago",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bank_transfer" => Some(PaymentMethod::BankTransfer),
            "mercado_pago" => Some(PaymentMethod::MercadoPago),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    AwaitingVerification,
    Verified,
    Rejected,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::AwaitingVerification => "awaiting_verification",
            PaymentStatus::Verified => "verified",
            PaymentStatus::Rejected => "rejected",
        }
    }
}

/// Everything the upload-proof form submits. Validated locally before the
/// dispatcher touches storage or the database.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofSubmission {
    pub subscription_id: Uuid,
    pub artist_id: Uuid,
    pub plan: PlanTier,
    pub billing_period: BillingPeriod,
    pub amount: i64,
    pub payment_method: PaymentMethod,
    pub payment_reference: Option<String>,
    pub paid_at: NaiveDate,
    pub proof: FileUpload,
}

/// Insert payload for payment_requests. Written once at proof submission,
/// never mutated afterwards; staff review reads it out of band.
#[derive(Debug, Clone)]
pub struct NewPaymentRequest {
    pub subscription_id: Uuid,
    pub artist_id: Uuid,
    pub plan: PlanTier,
    pub billing_period: BillingPeriod,
    pub amount: i64,
    pub currency: &'static str,
    pub payment_method: PaymentMethod,
    pub proof_of_payment_url: String,
    pub payment_reference: Option<String>,
    pub paid_at: NaiveDate,
    pub status: PaymentStatus,
}
