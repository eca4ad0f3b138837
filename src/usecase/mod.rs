pub mod login_usecase;
pub mod payment_instructions_usecase;
pub mod plan_catalog_usecase;
pub mod register_artist_usecase;
pub mod register_visitor_usecase;
pub mod submit_payment_proof_usecase;
pub mod upload_proof_context_usecase;
