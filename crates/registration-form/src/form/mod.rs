//! Registration form fields and the validation pipeline.

mod rules;

pub use rules::{
    validate_email, validate_given_name, validate_national_id, validate_phone, validate_surname,
    ValidationResult,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of the registration form, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    GivenName,
    #[serde(rename = "surname1")]
    FirstSurname,
    #[serde(rename = "surname2")]
    SecondSurname,
    Phone,
    NationalId,
    Email,
}

impl Field {
    /// All fields in the order they are validated.
    pub const ALL: [Field; 6] = [
        Field::GivenName,
        Field::FirstSurname,
        Field::SecondSurname,
        Field::Phone,
        Field::NationalId,
        Field::Email,
    ];

    /// Stable key used for the form input name.
    pub fn key(self) -> &'static str {
        match self {
            Field::GivenName => "givenName",
            Field::FirstSurname => "surname1",
            Field::SecondSurname => "surname2",
            Field::Phone => "phone",
            Field::NationalId => "nationalId",
            Field::Email => "email",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Field::GivenName => "Name",
            Field::FirstSurname => "First surname",
            Field::SecondSurname => "Second surname",
            Field::Phone => "Phone",
            Field::NationalId => "CURP",
            Field::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw form values as submitted. Missing inputs deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "surname1")]
    pub first_surname: String,
    #[serde(rename = "surname2")]
    pub second_surname: String,
    pub phone: String,
    #[serde(rename = "nationalId")]
    pub national_id: String,
    pub email: String,
}

impl RegistrationForm {
    /// Raw value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::GivenName => &self.given_name,
            Field::FirstSurname => &self.first_surname,
            Field::SecondSurname => &self.second_surname,
            Field::Phone => &self.phone,
            Field::NationalId => &self.national_id,
            Field::Email => &self.email,
        }
    }
}

/// The first failing field of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub field: Field,
    pub message: String,
}

/// Trimmed form values that passed every rule.
///
/// Only [`validate_form`] constructs this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    given_name: String,
    first_surname: String,
    second_surname: String,
    phone: String,
    national_id: String,
    email: String,
}

impl ValidatedForm {
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn first_surname(&self) -> &str {
        &self.first_surname
    }

    pub fn second_surname(&self) -> &str {
        &self.second_surname
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

fn check(field: Field, value: &str) -> ValidationResult {
    match field {
        Field::GivenName => validate_given_name(value),
        Field::FirstSurname => validate_surname(value, true),
        Field::SecondSurname => validate_surname(value, false),
        Field::Phone => validate_phone(value),
        Field::NationalId => validate_national_id(value),
        Field::Email => validate_email(value),
    }
}

/// Trim every value and run the rules in field order, stopping at the
/// first failure.
pub fn validate_form(form: &RegistrationForm) -> Result<ValidatedForm, Rejection> {
    for field in Field::ALL {
        let result = check(field, form.value(field).trim());
        if !result.is_valid() {
            return Err(Rejection {
                field,
                message: result.message().to_string(),
            });
        }
    }

    Ok(ValidatedForm {
        given_name: form.given_name.trim().to_string(),
        first_surname: form.first_surname.trim().to_string(),
        second_surname: form.second_surname.trim().to_string(),
        phone: form.phone.trim().to_string(),
        national_id: form.national_id.trim().to_string(),
        email: form.email.trim().to_string(),
    })
}

#[cfg(test)]
pub(crate) fn sample_form() -> RegistrationForm {
    RegistrationForm {
        given_name: "María José".into(),
        first_surname: "Pérez".into(),
        second_surname: "Núñez".into(),
        phone: "5551234567".into(),
        national_id: "PENM900101MDFRXR05".into(),
        email: "maria@example.com".into(),
    }
}
