use serde::{Deserialize, Serialize};

/// Subscription levels, lowest first. Feature limits hang off the tier but
/// the registration flow itself only carries the tier as opaque data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Silver,
    Gold,
    Premium,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Silver, PlanTier::Gold, PlanTier::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Silver => "silver",
            PlanTier::Gold => "gold",
            PlanTier::Premium => "premium",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "silver" => Some(PlanTier::Silver),
            "gold" => Some(PlanTier::Gold),
            "premium" => Some(PlanTier::Premium),
            _ => None,
        }
    }

    pub fn limits(&self) -> PlanLimits {
        match self {
            PlanTier::Silver => PlanLimits {
                max_artworks: 10,
                max_daily_status: 5,
                max_services: 5,
                features: &["basic_profile"],
                landing_section: "new_artists",
            },
            PlanTier::Gold => PlanLimits {
                max_artworks: 50,
                max_daily_status: 15,
                max_services: 15,
                features: &["flash_sales", "comments"],
                landing_section: "relevant_artists",
            },
            PlanTier::Premium => PlanLimits {
                max_artworks: 999,
                max_daily_status: 20,
                max_services: 20,
                features: &["flash_sales", "coupons", "reviews", "comments", "monthly_featured"],
                landing_section: "top_artists",
            },
        }
    }

    pub fn allows_feature(&self, feature: &str) -> bool {
        self.limits().features.contains(&feature)
    }
}

impl Default for PlanTier {
    /// Lowest tier; the wizard starts every draft with it.
    fn default() -> Self {
        PlanTier::Silver
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanLimits {
    pub max_artworks: u32,
    pub max_daily_status: u32,
    pub max_services: u32,
    pub features: &'static [&'static str],
    pub landing_section: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Monthly,
    Quarterly,
}

impl BillingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Quarterly => "quarterly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "monthly" => Some(BillingPeriod::Monthly),
            "quarterly" => Some(BillingPeriod::Quarterly),
            _ => None,
        }
    }
}

impl Default for BillingPeriod {
    fn default() -> Self {
        BillingPeriod::Monthly
    }
}

/// One row of the plan_pricing table. Amounts are CLP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanPricing {
    pub plan: PlanTier,
    pub monthly_price: i64,
    pub quarterly_price: i64,
    pub quarterly_discount_percentage: i32,
}

impl PlanPricing {
    pub fn amount_for(&self, period: BillingPeriod) -> i64 {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Quarterly => self.quarterly_price,
        }
    }
}
