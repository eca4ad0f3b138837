use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub subscription_id: Uuid,
    pub artist_id: Uuid,
    pub plan_type: String,
    pub billing_period: String,
    /// Amount in the smallest CLP unit (pesos carry no decimals).
    pub amount: i64,
    pub currency: String,
    pub payment_method: String,
    pub proof_of_payment_url: String,
    pub payment_reference: Option<String>,
    pub paid_at: Date,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
