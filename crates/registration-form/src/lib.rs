//! Registration form service.
//!
//! Validates personal-data form fields, keeps accepted registrants in an
//! in-memory registry, renders them as an HTML table and forwards each
//! record to a remote collection endpoint without waiting for the result.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod orchestrator;
pub mod registry;
pub mod render;
pub mod submission;

pub use config::Config;
pub use error::FormError;
pub use form::{validate_form, Field, RegistrationForm, ValidatedForm, ValidationResult};
pub use orchestrator::{Orchestrator, Submission};
pub use registry::{Registrant, Registry};
pub use submission::{Delivery, Dispatcher, Submitter};
