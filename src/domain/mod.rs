pub mod appraisal;
pub mod controller;
pub mod document;
pub mod features;
pub mod form;
pub mod listing;
pub mod vocab;

pub use appraisal::{Appraisal, AppraisalInput, AppraisalStatus, Created};
pub use controller::{AppraisalApi, DeleteOutcome, FormController, SaveOutcome, SavePayload};
pub use form::FormError;
