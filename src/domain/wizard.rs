//! The registration wizard's accumulation state machine: a strictly linear
//! five-step flow. Steps validate their own input (see `validation`); the
//! wizard only merges accepted patches and moves the step index.

use crate::domain::error::ValidationError;
use crate::domain::models::registration::{ArtistRegistration, RecordPatch, RegistrationDraft};

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationWizard {
    current_step: u8,
    draft: RegistrationDraft,
}

impl RegistrationWizard {
    /// Fresh wizard: step 1, draft holding only the plan defaults.
    pub fn new() -> Self {
        Self {
            current_step: FIRST_STEP,
            draft: RegistrationDraft::new(),
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Merge an accepted patch and move forward. The merge always applies;
    /// the index stops at the last step.
    pub fn advance(&mut self, patch: RecordPatch) {
        self.draft.apply(patch);
        if self.current_step < LAST_STEP {
            self.current_step += 1;
        }
    }

    /// Step back for editing. The draft keeps everything already entered;
    /// nothing is rolled back or re-validated.
    pub fn retreat(&mut self) {
        if self.current_step > FIRST_STEP {
            self.current_step -= 1;
        }
    }

    /// Final submission: merge the last patch and hand over the full record.
    pub fn complete(mut self, patch: RecordPatch) -> Result<ArtistRegistration, ValidationError> {
        self.draft.apply(patch);
        self.draft.try_finish()
    }
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}
