use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "artist_profiles")]
pub struct Model {
    /// Same uuid as the owning users row.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub status: String,
    pub plan: String,
    pub plan_expires_at: Option<DateTimeWithTimeZone>,
    pub full_name: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub age: i16,
    pub nationality: String,
    pub country: String,
    pub city: String,
    pub whatsapp: Option<String>,
    pub website_url: Option<String>,
    pub profile_photo_url: Option<String>,
    pub verification_selfie_url: Option<String>,
    pub id_document_url: Option<String>,
    pub availability: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
