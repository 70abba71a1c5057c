//! Lead form state and local validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use titu_common::Notice;

use crate::catalog::{Budget, CompanySize, Interest};
use crate::notices;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Whether `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Why a form cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormIssue {
    #[error("required fields are missing")]
    MissingFields,
    #[error("email address is invalid")]
    InvalidEmail,
}

impl FormIssue {
    pub fn notice(self) -> Notice {
        match self {
            Self::MissingFields => notices::missing_fields(),
            Self::InvalidEmail => notices::invalid_email(),
        }
    }
}

/// What the prospect has entered so far. Everything but `message` is
/// required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub company_size: Option<CompanySize>,
    pub budget: Option<Budget>,
    pub interest: Option<Interest>,
    pub message: String,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a company size by label. Unknown labels leave the field as is.
    pub fn select_company_size(&mut self, label: &str) -> bool {
        select(&mut self.company_size, CompanySize::from_label(label))
    }

    pub fn select_budget(&mut self, label: &str) -> bool {
        select(&mut self.budget, Budget::from_label(label))
    }

    pub fn select_interest(&mut self, label: &str) -> bool {
        select(&mut self.interest, Interest::from_label(label))
    }

    /// Check the form and build the record to store.
    ///
    /// Missing fields are reported before a malformed e-mail. Text fields
    /// are trimmed; whitespace-only counts as missing.
    pub fn validate(&self) -> Result<LeadRecord, FormIssue> {
        let name = self.name.trim();
        let email = self.email.trim();
        let company = self.company.trim();

        let (Some(company_size), Some(budget), Some(interest)) =
            (self.company_size, self.budget, self.interest)
        else {
            return Err(FormIssue::MissingFields);
        };
        if name.is_empty() || email.is_empty() || company.is_empty() {
            return Err(FormIssue::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(FormIssue::InvalidEmail);
        }

        Ok(LeadRecord {
            name: name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
            company_size,
            budget,
            interest,
            message: self.message.trim().to_string(),
            status: LeadRecord::NEW,
        })
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn select<T>(slot: &mut Option<T>, choice: Option<T>) -> bool {
    match choice {
        Some(value) => {
            *slot = Some(value);
            true
        }
        None => false,
    }
}

/// A validated lead, serialized with the record store's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Empresa")]
    pub company: String,
    #[serde(rename = "TamañoEmpresa")]
    pub company_size: CompanySize,
    #[serde(rename = "Presupuesto")]
    pub budget: Budget,
    #[serde(rename = "InterésPrincipal")]
    pub interest: Interest,
    #[serde(rename = "Mensaje")]
    pub message: String,
    #[serde(rename = "Estado")]
    pub status: &'static str,
}

impl LeadRecord {
    /// Pipeline status of freshly captured leads.
    pub const NEW: &'static str = "Nuevo";
}
