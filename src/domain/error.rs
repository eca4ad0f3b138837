use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Password hashing failed")]
    PasswordHash,

    #[error("Token generation failed: {0}")]
    Token(String),
}

/// Local, user-correctable failures. A step never advances past one of
/// these; the first failing rule wins and its message is shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("The password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("You must be at least 18 years old")]
    Underage,

    #[error("Invalid age")]
    InvalidAge,

    #[error("Every verification document is required")]
    MissingDocuments,

    #[error("Files may not exceed 5MB")]
    FileTooLarge,

    #[error("Only image files are allowed")]
    NotAnImage,

    #[error("The biography must be at least 50 characters")]
    BioTooShort,

    #[error("The biography may not exceed 500 characters")]
    BioTooLong,

    #[error("Invalid WhatsApp number. Use the international format: +56912345678")]
    InvalidWhatsapp,

    #[error("Invalid website URL")]
    InvalidWebsiteUrl,

    #[error("A proof of payment image is required")]
    MissingProof,

    #[error("The payment date is required")]
    MissingPaymentDate,

    #[error("Invalid payment date")]
    InvalidPaymentDate,

    #[error("The registration is incomplete")]
    IncompleteRecord,
}

/// A remote call failed partway through a dispatcher pipeline. The variant
/// names the step; earlier writes are NOT rolled back (known gap, see
/// DESIGN.md).
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Could not create your account")]
    CreateCredential(#[source] RepositoryError),

    #[error("Could not create your user record")]
    CreateUser(#[source] RepositoryError),

    #[error("Could not create your artist profile")]
    CreateProfile(#[source] RepositoryError),

    #[error("Could not create your subscription")]
    CreateSubscription(#[source] RepositoryError),

    #[error("Could not upload your proof of payment")]
    UploadProof(#[source] StorageError),

    #[error("Could not record your payment")]
    CreatePaymentRequest(#[source] RepositoryError),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Io(String),

    #[error("Artifact already exists at {0}")]
    AlreadyExists(String),
}
