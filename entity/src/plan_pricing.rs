use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "plan_pricing")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub plan_type: String,
    pub monthly_price: i64,
    pub quarterly_price: i64,
    pub quarterly_discount_percentage: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
