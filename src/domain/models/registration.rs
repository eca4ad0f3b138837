use crate::domain::error::ValidationError;
use crate::domain::models::plan::{BillingPeriod, PlanTier};

/// An uploaded file as it arrives from a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Extension taken from the original file name, `bin` when absent.
    pub fn extension(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .unwrap_or("bin")
    }
}

/// Shallow-merge patch produced by a successful step submission. Later
/// patches overwrite earlier values field by field; fields left `None` are
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub full_name: Option<String>,
    pub display_name: Option<String>,
    pub age: Option<u8>,
    pub nationality: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub profile_photo: Option<FileUpload>,
    pub verification_selfie: Option<FileUpload>,
    pub id_document: Option<FileUpload>,
    pub bio: Option<String>,
    pub whatsapp: Option<String>,
    pub website_url: Option<String>,
    pub plan: Option<PlanTier>,
    pub billing_period: Option<BillingPeriod>,
}

/// The record accumulated across wizard steps. Only plan fields carry a
/// value before the user has visited the matching step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub full_name: Option<String>,
    pub display_name: Option<String>,
    pub age: Option<u8>,
    pub nationality: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub profile_photo: Option<FileUpload>,
    pub verification_selfie: Option<FileUpload>,
    pub id_document: Option<FileUpload>,
    pub bio: Option<String>,
    pub whatsapp: Option<String>,
    pub website_url: Option<String>,
    pub plan: PlanTier,
    pub billing_period: BillingPeriod,
}

macro_rules! merge_field {
    ($draft:ident, $patch:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $draft.$field = Some(value);
            }
        )+
    };
}

impl RegistrationDraft {
    /// Empty draft with the plan defaults the wizard mounts with.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow merge: every populated patch field overwrites the draft's.
    pub fn apply(&mut self, patch: RecordPatch) {
        merge_field!(
            self,
            patch,
            email,
            password,
            confirm_password,
            full_name,
            display_name,
            age,
            nationality,
            country,
            city,
            profile_photo,
            verification_selfie,
            id_document,
            bio,
            whatsapp,
            website_url,
        );
        if let Some(plan) = patch.plan {
            self.plan = plan;
        }
        if let Some(period) = patch.billing_period {
            self.billing_period = period;
        }
    }

    /// Consumes the draft into the full record the dispatcher needs. Fails
    /// with `IncompleteRecord` unless every step has contributed its fields;
    /// the optional contact fields and the plan defaults are exempt.
    pub fn try_finish(self) -> Result<ArtistRegistration, ValidationError> {
        let incomplete = ValidationError::IncompleteRecord;
        Ok(ArtistRegistration {
            email: self.email.ok_or(incomplete.clone())?,
            password: self.password.ok_or(incomplete.clone())?,
            full_name: self.full_name.ok_or(incomplete.clone())?,
            display_name: self.display_name.ok_or(incomplete.clone())?,
            age: self.age.ok_or(incomplete.clone())?,
            nationality: self.nationality.ok_or(incomplete.clone())?,
            country: self.country.ok_or(incomplete.clone())?,
            city: self.city.ok_or(incomplete.clone())?,
            profile_photo: self.profile_photo,
            verification_selfie: self.verification_selfie,
            id_document: self.id_document,
            bio: self.bio.ok_or(incomplete)?,
            whatsapp: self.whatsapp,
            website_url: self.website_url,
            plan: self.plan,
            billing_period: self.billing_period,
        })
    }
}

/// A fully-accumulated registration, ready for dispatch. Consumed once; the
/// confirm-password field is dropped here, it has no life past step 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRegistration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub display_name: String,
    pub age: u8,
    pub nationality: String,
    pub country: String,
    pub city: String,
    pub profile_photo: Option<FileUpload>,
    pub verification_selfie: Option<FileUpload>,
    pub id_document: Option<FileUpload>,
    pub bio: String,
    pub whatsapp: Option<String>,
    pub website_url: Option<String>,
    pub plan: PlanTier,
    pub billing_period: BillingPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> FileUpload {
        FileUpload {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0u8; 16],
        }
    }

    #[test]
    fn new_draft_only_carries_plan_defaults() {
        let draft = RegistrationDraft::new();
        assert_eq!(draft.email, None);
        assert_eq!(draft.plan, PlanTier::Silver);
        assert_eq!(draft.billing_period, BillingPeriod::Monthly);
    }

    #[test]
    fn apply_overwrites_only_populated_fields() {
        let mut draft = RegistrationDraft::new();
        draft.apply(RecordPatch {
            email: Some("a@b.com".to_string()),
            ..Default::default()
        });
        draft.apply(RecordPatch {
            full_name: Some("Ana Rivas".to_string()),
            ..Default::default()
        });
        assert_eq!(draft.email.as_deref(), Some("a@b.com"));
        assert_eq!(draft.full_name.as_deref(), Some("Ana Rivas"));
    }

    #[test]
    fn later_patch_wins_on_the_same_field() {
        let mut draft = RegistrationDraft::new();
        draft.apply(RecordPatch {
            city: Some("Santiago".to_string()),
            ..Default::default()
        });
        draft.apply(RecordPatch {
            city: Some("Valparaiso".to_string()),
            ..Default::default()
        });
        assert_eq!(draft.city.as_deref(), Some("Valparaiso"));
    }

    #[test]
    fn try_finish_rejects_a_partial_draft() {
        let draft = RegistrationDraft::new();
        assert_eq!(draft.try_finish(), Err(ValidationError::IncompleteRecord));
    }

    #[test]
    fn try_finish_accepts_a_complete_draft_without_optional_contact_fields() {
        let mut draft = RegistrationDraft::new();
        draft.apply(RecordPatch {
            email: Some("a@b.com".into()),
            password: Some("abc123".into()),
            confirm_password: Some("abc123".into()),
            full_name: Some("Ana Rivas".into()),
            display_name: Some("anarts".into()),
            age: Some(24),
            nationality: Some("Chilean".into()),
            country: Some("Chile".into()),
            city: Some("Santiago".into()),
            profile_photo: Some(png("me.png")),
            verification_selfie: Some(png("selfie.png")),
            id_document: Some(png("id.png")),
            bio: Some("b".repeat(60)),
            ..Default::default()
        });
        let record = draft.try_finish().expect("complete draft");
        assert_eq!(record.whatsapp, None);
        assert_eq!(record.plan, PlanTier::Silver);
    }

    #[test]
    fn extension_falls_back_when_the_name_has_none() {
        assert_eq!(png("photo.PNG").extension(), "PNG");
        assert_eq!(png("archive.tar.gz").extension(), "gz");
        let mut file = png("noext");
        assert_eq!(file.extension(), "bin");
        file.file_name = "trailing.".into();
        assert_eq!(file.extension(), "bin");
    }
}
