//! Per-step form validation. Every validator is a pure value struct with a
//! `validate()` method: no I/O, first failing rule wins, success yields the
//! normalized patch the wizard merges into its draft.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::error::ValidationError;
use crate::domain::models::payment::ProofSubmission;
use crate::domain::models::plan::{BillingPeriod, PlanTier};
use crate::domain::models::registration::{FileUpload, RecordPatch};

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 120;
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;
pub const MIN_BIO_CHARS: usize = 50;
pub const MAX_BIO_CHARS: usize = 500;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

// E.164-like: optional +, then 2..15 digits with a non-zero lead.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern"));

/// Size and type rules shared by the verification uploads and the payment
/// proof. Callable from metadata alone so clients can pre-check a file
/// before shipping its bytes.
pub fn check_image_file(content_type: &str, size_bytes: u64) -> Result<(), ValidationError> {
    if size_bytes > MAX_FILE_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    if !content_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage);
    }
    Ok(())
}

fn none_if_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

/// Absolute http(s) URL with a non-empty host. Deliberately lenient past
/// the host, like the rest of the platform's URL handling.
fn is_well_formed_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split('/').next().unwrap_or("");
            !host.is_empty() && !host.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Step 1: account credentials.
#[derive(Debug, Clone)]
pub struct AccountStep {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AccountStep {
    pub fn validate(self) -> Result<RecordPatch, ValidationError> {
        let email = self.email.trim().to_string();
        if email.is_empty() || self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::PasswordTooShort);
        }
        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(RecordPatch {
            email: Some(email),
            password: Some(self.password),
            confirm_password: Some(self.confirm_password),
            ..Default::default()
        })
    }
}

/// Step 2: personal info. Age arrives as the raw form string.
#[derive(Debug, Clone)]
pub struct PersonalInfoStep {
    pub full_name: String,
    pub display_name: String,
    pub age: String,
    pub nationality: String,
    pub country: String,
    pub city: String,
}

impl PersonalInfoStep {
    pub fn validate(self) -> Result<RecordPatch, ValidationError> {
        let full_name = self.full_name.trim().to_string();
        let display_name = self.display_name.trim().to_string();
        let age_raw = self.age.trim().to_string();
        let nationality = self.nationality.trim().to_string();
        let country = self.country.trim().to_string();
        let city = self.city.trim().to_string();

        if [&full_name, &display_name, &age_raw, &nationality, &country, &city]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(ValidationError::MissingFields);
        }

        let age: i64 = match age_raw.parse() {
            Ok(age) => age,
            // Non-numeric input gets the same answer as a minor, matching
            // the form's behavior.
            Err(_) => return Err(ValidationError::Underage),
        };
        if age < MIN_AGE {
            return Err(ValidationError::Underage);
        }
        if age > MAX_AGE {
            return Err(ValidationError::InvalidAge);
        }

        Ok(RecordPatch {
            full_name: Some(full_name),
            display_name: Some(display_name),
            age: Some(age as u8),
            nationality: Some(nationality),
            country: Some(country),
            city: Some(city),
            ..Default::default()
        })
    }
}

/// Step 3: identity verification uploads. All three are mandatory.
#[derive(Debug, Clone)]
pub struct VerificationStep {
    pub profile_photo: Option<FileUpload>,
    pub verification_selfie: Option<FileUpload>,
    pub id_document: Option<FileUpload>,
}

impl VerificationStep {
    pub fn validate(self) -> Result<RecordPatch, ValidationError> {
        let (Some(profile_photo), Some(selfie), Some(id_document)) =
            (self.profile_photo, self.verification_selfie, self.id_document)
        else {
            return Err(ValidationError::MissingDocuments);
        };
        for file in [&profile_photo, &selfie, &id_document] {
            check_image_file(&file.content_type, file.size())?;
        }
        Ok(RecordPatch {
            profile_photo: Some(profile_photo),
            verification_selfie: Some(selfie),
            id_document: Some(id_document),
            ..Default::default()
        })
    }
}

/// Step 4: biography and optional contact channels.
#[derive(Debug, Clone)]
pub struct ContactBioStep {
    pub bio: String,
    pub whatsapp: Option<String>,
    pub website_url: Option<String>,
}

impl ContactBioStep {
    pub fn validate(self) -> Result<RecordPatch, ValidationError> {
        let bio = self.bio.trim().to_string();
        let bio_chars = bio.chars().count();
        if bio_chars < MIN_BIO_CHARS {
            return Err(ValidationError::BioTooShort);
        }
        if bio_chars > MAX_BIO_CHARS {
            return Err(ValidationError::BioTooLong);
        }

        // Blank optional fields count as absent; the stripped phone is what
        // gets stored.
        let whatsapp = match self.whatsapp.and_then(none_if_blank) {
            Some(raw) => {
                let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
                if !PHONE_RE.is_match(&stripped) {
                    return Err(ValidationError::InvalidWhatsapp);
                }
                Some(stripped)
            }
            None => None,
        };

        let website_url = match self.website_url.and_then(none_if_blank) {
            Some(url) => {
                if !is_well_formed_url(&url) {
                    return Err(ValidationError::InvalidWebsiteUrl);
                }
                Some(url)
            }
            None => None,
        };

        Ok(RecordPatch {
            bio: Some(bio),
            whatsapp,
            website_url,
            ..Default::default()
        })
    }
}

/// Step 5 carries no validation: both selectors always hold a valid value.
#[derive(Debug, Clone, Copy)]
pub struct PlanSelection {
    pub plan: PlanTier,
    pub billing_period: BillingPeriod,
}

impl PlanSelection {
    pub fn into_patch(self) -> RecordPatch {
        RecordPatch {
            plan: Some(self.plan),
            billing_period: Some(self.billing_period),
            ..Default::default()
        }
    }
}

/// The upload-proof form before local validation. The dispatcher refuses to
/// make any remote call until this has passed.
#[derive(Debug, Clone)]
pub struct ProofSubmissionForm {
    pub subscription_id: uuid::Uuid,
    pub artist_id: uuid::Uuid,
    pub plan: PlanTier,
    pub billing_period: BillingPeriod,
    pub amount: i64,
    pub payment_method: crate::domain::models::payment::PaymentMethod,
    pub payment_reference: Option<String>,
    pub payment_date: String,
    pub proof: Option<FileUpload>,
}

impl ProofSubmissionForm {
    pub fn validate(self) -> Result<ProofSubmission, ValidationError> {
        let Some(proof) = self.proof else {
            return Err(ValidationError::MissingProof);
        };
        check_image_file(&proof.content_type, proof.size())?;

        let date_raw = self.payment_date.trim();
        if date_raw.is_empty() {
            return Err(ValidationError::MissingPaymentDate);
        }
        let paid_at = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidPaymentDate)?;

        Ok(ProofSubmission {
            subscription_id: self.subscription_id,
            artist_id: self.artist_id,
            plan: self.plan,
            billing_period: self.billing_period,
            amount: self.amount,
            payment_method: self.payment_method,
            payment_reference: self.payment_reference.and_then(none_if_blank),
            paid_at,
            proof,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;
    use crate::domain::models::payment::PaymentMethod;

    fn account(email: &str, password: &str, confirm: &str) -> AccountStep {
        AccountStep {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn personal(age: &str) -> PersonalInfoStep {
        PersonalInfoStep {
            full_name: "Ana Rivas".into(),
            display_name: "anarts".into(),
            age: age.into(),
            nationality: "Chilean".into(),
            country: "Chile".into(),
            city: "Santiago".into(),
        }
    }

    fn image(size: usize) -> FileUpload {
        FileUpload {
            file_name: "photo.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![0u8; size],
        }
    }

    // Step 1

    #[test]
    fn valid_account_step_is_accepted_and_normalized() {
        let patch = account(" a@b.com ", "abc123", "abc123").validate().unwrap();
        assert_eq!(patch.email.as_deref(), Some("a@b.com"));
        assert_eq!(patch.password.as_deref(), Some("abc123"));
    }

    #[test]
    fn five_char_password_gets_the_minimum_length_message() {
        assert_eq!(
            account("a@b.com", "abc12", "abc12").validate(),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[rstest]
    #[case("", "abc123", "abc123", ValidationError::MissingFields)]
    #[case("a@b.com", "", "", ValidationError::MissingFields)]
    #[case("a@b.com", "abc123", "abc124", ValidationError::PasswordMismatch)]
    #[case("not-an-email", "abc123", "abc123", ValidationError::InvalidEmail)]
    #[case("a b@c.com", "abc123", "abc123", ValidationError::InvalidEmail)]
    #[case("a@b", "abc123", "abc123", ValidationError::InvalidEmail)]
    fn bad_account_steps_are_rejected(
        #[case] email: &str,
        #[case] password: &str,
        #[case] confirm: &str,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(account(email, password, confirm).validate(), Err(expected));
    }

    // Step 2

    #[rstest]
    #[case("18")]
    #[case("64")]
    #[case("120")]
    fn ages_within_bounds_pass(#[case] age: &str) {
        let patch = personal(age).validate().unwrap();
        assert_eq!(patch.age, Some(age.parse::<u8>().unwrap()));
    }

    #[rstest]
    #[case("17", ValidationError::Underage)]
    #[case("-3", ValidationError::Underage)]
    #[case("twenty", ValidationError::Underage)]
    #[case("18.5", ValidationError::Underage)]
    #[case("121", ValidationError::InvalidAge)]
    fn ages_outside_bounds_fail(#[case] age: &str, #[case] expected: ValidationError) {
        assert_eq!(personal(age).validate(), Err(expected));
    }

    #[test]
    fn blank_personal_fields_are_rejected() {
        let mut step = personal("30");
        step.city = "   ".into();
        assert_eq!(step.validate(), Err(ValidationError::MissingFields));
    }

    // Step 3

    #[test]
    fn three_small_images_pass() {
        let patch = VerificationStep {
            profile_photo: Some(image(1024)),
            verification_selfie: Some(image(2048)),
            id_document: Some(image(4096)),
        }
        .validate()
        .unwrap();
        assert!(patch.profile_photo.is_some());
    }

    #[test]
    fn any_missing_document_is_rejected() {
        let step = VerificationStep {
            profile_photo: Some(image(1024)),
            verification_selfie: None,
            id_document: Some(image(1024)),
        };
        assert_eq!(step.validate(), Err(ValidationError::MissingDocuments));
    }

    #[test]
    fn file_at_the_limit_passes_one_byte_over_fails() {
        assert!(check_image_file("image/png", MAX_FILE_BYTES).is_ok());
        assert_eq!(
            check_image_file("image/png", MAX_FILE_BYTES + 1),
            Err(ValidationError::FileTooLarge)
        );
    }

    #[test]
    fn non_image_mime_is_rejected() {
        assert_eq!(
            check_image_file("application/pdf", 10),
            Err(ValidationError::NotAnImage)
        );
    }

    // Step 4

    #[rstest]
    #[case(49, Some(ValidationError::BioTooShort))]
    #[case(50, None)]
    #[case(500, None)]
    #[case(501, Some(ValidationError::BioTooLong))]
    fn bio_bounds_are_inclusive(#[case] len: usize, #[case] expected: Option<ValidationError>) {
        let result = ContactBioStep {
            bio: "x".repeat(len),
            whatsapp: None,
            website_url: None,
        }
        .validate();
        match expected {
            Some(err) => assert_eq!(result, Err(err)),
            None => assert!(result.is_ok()),
        }
    }

    #[test]
    fn whatsapp_is_stripped_then_matched() {
        let patch = ContactBioStep {
            bio: "x".repeat(60),
            whatsapp: Some("+56 9 1234 5678".into()),
            website_url: None,
        }
        .validate()
        .unwrap();
        assert_eq!(patch.whatsapp.as_deref(), Some("+56912345678"));
    }

    #[rstest]
    #[case("0012345")]
    #[case("+0012345")]
    #[case("not-a-phone")]
    fn bad_whatsapp_numbers_are_rejected(#[case] number: &str) {
        let result = ContactBioStep {
            bio: "x".repeat(60),
            whatsapp: Some(number.into()),
            website_url: None,
        }
        .validate();
        assert_eq!(result, Err(ValidationError::InvalidWhatsapp));
    }

    #[test]
    fn blank_optional_fields_are_treated_as_absent() {
        let patch = ContactBioStep {
            bio: "x".repeat(60),
            whatsapp: Some("   ".into()),
            website_url: Some(String::new()),
        }
        .validate()
        .unwrap();
        assert_eq!(patch.whatsapp, None);
        assert_eq!(patch.website_url, None);
    }

    #[rstest]
    #[case("https://ana.art", true)]
    #[case("http://ana.art/portfolio", true)]
    #[case("ana.art", false)]
    #[case("ftp://ana.art", false)]
    #[case("https://", false)]
    fn website_urls_must_be_absolute_http(#[case] url: &str, #[case] ok: bool) {
        let result = ContactBioStep {
            bio: "x".repeat(60),
            whatsapp: None,
            website_url: Some(url.into()),
        }
        .validate();
        assert_eq!(result.is_ok(), ok, "url: {url}");
    }

    // Proof form

    fn proof_form(date: &str, proof: Option<FileUpload>) -> ProofSubmissionForm {
        ProofSubmissionForm {
            subscription_id: Uuid::new_v4(),
            artist_id: Uuid::new_v4(),
            plan: PlanTier::Gold,
            billing_period: BillingPeriod::Monthly,
            amount: 150_000,
            payment_method: PaymentMethod::BankTransfer,
            payment_reference: Some("  ".into()),
            payment_date: date.into(),
            proof,
        }
    }

    #[test]
    fn missing_payment_date_is_rejected() {
        assert_eq!(
            proof_form("", Some(image(64))).validate(),
            Err(ValidationError::MissingPaymentDate)
        );
    }

    #[test]
    fn missing_proof_file_is_rejected() {
        assert_eq!(
            proof_form("2026-08-01", None).validate(),
            Err(ValidationError::MissingProof)
        );
    }

    #[test]
    fn valid_proof_form_normalizes_the_reference() {
        let submission = proof_form("2026-08-01", Some(image(64))).validate().unwrap();
        assert_eq!(submission.payment_reference, None);
        assert_eq!(submission.paid_at.to_string(), "2026-08-01");
    }

    #[test]
    fn malformed_payment_date_is_rejected() {
        assert_eq!(
            proof_form("01/08/2026", Some(image(64))).validate(),
            Err(ValidationError::InvalidPaymentDate)
        );
    }
}
