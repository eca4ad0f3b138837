use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::plan::PlanTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtistStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl ArtistStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtistStatus::Pending => "pending",
            ArtistStatus::Approved => "approved",
            ArtistStatus::Rejected => "rejected",
            ArtistStatus::Suspended => "suspended",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ArtistStatus::Pending),
            "approved" => Some(ArtistStatus::Approved),
            "rejected" => Some(ArtistStatus::Rejected),
            "suspended" => Some(ArtistStatus::Suspended),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Away,
    Vacation,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Away => "away",
            Availability::Vacation => "vacation",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Availability::Available),
            "away" => Some(Availability::Away),
            "vacation" => Some(Availability::Vacation),
            _ => None,
        }
    }
}

/// Insert payload for a new artist profile. Every profile starts in
/// `Pending` until staff verify the payment, so the status is not a field
/// here.
#[derive(Debug, Clone)]
pub struct NewArtistProfile {
    pub id: Uuid,
    pub plan: PlanTier,
    pub full_name: String,
    pub display_name: String,
    pub age: u8,
    pub nationality: String,
    pub country: String,
    pub city: String,
    pub bio: String,
    pub whatsapp: Option<String>,
    pub website_url: Option<String>,
    pub profile_photo_url: Option<String>,
    pub verification_selfie_url: Option<String>,
    pub id_document_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistProfile {
    pub id: Uuid,
    pub status: ArtistStatus,
    pub plan: PlanTier,
    pub full_name: String,
    pub display_name: String,
    pub age: u8,
    pub nationality: String,
    pub country: String,
    pub city: String,
    pub bio: Option<String>,
    pub whatsapp: Option<String>,
    pub website_url: Option<String>,
    pub profile_photo_url: Option<String>,
    pub availability: Availability,
    pub created_at: DateTime<Utc>,
}
