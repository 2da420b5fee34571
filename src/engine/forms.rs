//! Canonical schemas for the registration and login forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Strictness, UserKind};
use crate::engine::cpf::normalize_digits;
use crate::engine::rules::{self, RuleResult, ValidationReport, INVALID_CPF};
use crate::error::Result;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const CPF_RAW_MIN: usize = 11;
pub const CPF_RAW_MAX: usize = 14;
pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 50;
pub const PHONE_MIN: usize = 10;
pub const ADDRESS_MIN: usize = 5;
pub const ADDRESS_MAX: usize = 200;
pub const REGISTRATION_MIN: usize = 3;
pub const REGISTRATION_MAX: usize = 20;

/// Settings a schema needs beyond the submitted values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormRules {
    pub strictness: Strictness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    SoloMother,
    Professional,
    Login,
}

impl FormKind {
    /// Account category a form of this kind registers, if any.
    #[must_use]
    pub fn user_kind(self) -> Option<UserKind> {
        match self {
            Self::SoloMother => Some(UserKind::SoloMother),
            Self::Professional => Some(UserKind::Professional),
            Self::Login => None,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SoloMother => f.write_str("solo-mother"),
            Self::Professional => f.write_str("professional"),
            Self::Login => f.write_str("login"),
        }
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "solo-mother" => Ok(Self::SoloMother),
            "professional" => Ok(Self::Professional),
            "login" => Ok(Self::Login),
            _ => Err(format!(
                "Unknown form: {s}. Valid options: solo-mother, professional, login"
            )),
        }
    }
}

/// A submitted form that can be checked against its schema.
pub trait Form {
    fn kind(&self) -> FormKind;

    fn validate(&self, settings: &FormRules) -> ValidationReport;

    /// The CPF exactly as typed.
    fn raw_cpf(&self) -> &str;

    /// Digits-only CPF, the form in which it is stored and submitted.
    fn normalized_cpf(&self) -> String {
        normalize_digits(self.raw_cpf())
    }
}

/// Monthly income as typed: forms may send a number or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Income {
    Amount(f64),
    Text(String),
}

impl Income {
    /// The numeric value, or `None` if the text is not a finite number.
    /// Blank text counts as zero.
    #[must_use]
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Amount(v) => Some(*v),
            Self::Text(t) if t.trim().is_empty() => Some(0.0),
            Self::Text(t) => t
                .trim()
                .replace(',', ".")
                .parse()
                .ok()
                .filter(|v: &f64| v.is_finite()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoloMotherForm {
    pub name: String,
    pub cpf: String,
    pub email: Option<String>,
    pub password: String,
    pub phone: String,
    pub address: String,
    pub monthly_income: Option<Income>,
    pub employment_status: Option<String>,
    pub education: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfessionalForm {
    pub name: String,
    pub cpf: String,
    pub email: Option<String>,
    pub password: String,
    pub phone: String,
    pub profession: String,
    pub registration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub cpf: String,
    pub password: String,
}

fn check_name(name: &str) -> RuleResult {
    rules::length_between(
        name,
        NAME_MIN,
        NAME_MAX,
        "name must have at least 2 characters",
        "name is too long",
    )
}

fn check_registration_cpf(cpf: &str, strictness: Strictness) -> RuleResult {
    rules::length_between(
        cpf,
        CPF_RAW_MIN,
        CPF_RAW_MAX,
        "CPF must have 11 digits",
        INVALID_CPF,
    )?;
    rules::cpf(cpf, strictness)
}

fn check_email(email: Option<&str>) -> RuleResult {
    email.map_or(Ok(()), rules::email)
}

fn check_password(password: &str) -> RuleResult {
    rules::length_between(
        password,
        PASSWORD_MIN,
        PASSWORD_MAX,
        "password must have at least 6 characters",
        "password is too long",
    )
}

fn check_phone(phone: &str) -> RuleResult {
    rules::min_length(phone, PHONE_MIN, "phone must have at least 10 digits")?;
    rules::phone_format(phone)
}

fn check_income(income: Option<&Income>) -> RuleResult {
    let Some(income) = income else {
        return Ok(());
    };
    match income.amount() {
        None => Err("income must be a number"),
        Some(v) if v < 0.0 => Err("income cannot be negative"),
        Some(_) => Ok(()),
    }
}

fn check_selection(value: Option<&str>, message: &'static str) -> RuleResult {
    value.map_or(Ok(()), |v| rules::not_empty(v, message))
}

impl Form for SoloMotherForm {
    fn kind(&self) -> FormKind {
        FormKind::SoloMother
    }

    fn validate(&self, settings: &FormRules) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.check("name", check_name(&self.name));
        report.check("cpf", check_registration_cpf(&self.cpf, settings.strictness));
        report.check("email", check_email(self.email.as_deref()));
        report.check("password", check_password(&self.password));
        report.check("phone", check_phone(&self.phone));
        report.check(
            "address",
            rules::length_between(
                &self.address,
                ADDRESS_MIN,
                ADDRESS_MAX,
                "address is required",
                "address is too long",
            ),
        );
        report.check("monthlyIncome", check_income(self.monthly_income.as_ref()));
        report.check(
            "employmentStatus",
            check_selection(
                self.employment_status.as_deref(),
                "select an employment status",
            ),
        );
        report.check(
            "education",
            check_selection(self.education.as_deref(), "select an education level"),
        );
        report
    }

    fn raw_cpf(&self) -> &str {
        &self.cpf
    }
}

impl Form for ProfessionalForm {
    fn kind(&self) -> FormKind {
        FormKind::Professional
    }

    fn validate(&self, settings: &FormRules) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.check("name", check_name(&self.name));
        report.check("cpf", check_registration_cpf(&self.cpf, settings.strictness));
        report.check("email", check_email(self.email.as_deref()));
        report.check("password", check_password(&self.password));
        report.check("phone", check_phone(&self.phone));
        report.check(
            "profession",
            rules::not_empty(&self.profession, "select a profession"),
        );
        report.check(
            "registration",
            rules::length_between(
                &self.registration,
                REGISTRATION_MIN,
                REGISTRATION_MAX,
                "registration number is required",
                "registration number is too long",
            ),
        );
        report
    }

    fn raw_cpf(&self) -> &str {
        &self.cpf
    }
}

impl Form for LoginForm {
    fn kind(&self) -> FormKind {
        FormKind::Login
    }

    fn validate(&self, settings: &FormRules) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.check(
            "cpf",
            rules::min_length(&self.cpf, CPF_RAW_MIN, "CPF must have 11 digits")
                .and_then(|()| rules::cpf(&self.cpf, settings.strictness)),
        );
        report.check(
            "password",
            rules::not_empty(&self.password, "password is required"),
        );
        report
    }

    fn raw_cpf(&self) -> &str {
        &self.cpf
    }
}

/// Parse `json` as a form of `kind` and validate it.
///
/// # Errors
/// Returns [`crate::RaizError::Json`] when `json` is not a JSON object of the
/// expected shape. Invalid field values are reported in the returned report.
pub fn validate_json(kind: FormKind, json: &str, settings: &FormRules) -> Result<ValidationReport> {
    let report = match kind {
        FormKind::SoloMother => serde_json::from_str::<SoloMotherForm>(json)?.validate(settings),
        FormKind::Professional => {
            serde_json::from_str::<ProfessionalForm>(json)?.validate(settings)
        }
        FormKind::Login => serde_json::from_str::<LoginForm>(json)?.validate(settings),
    };
    tracing::debug!(form = %kind, errors = report.errors().len(), "form validated");
    Ok(report)
}
