//! Field buffers for the contact and newsletter forms.
//!
//! Submitting never leaves the page: a valid submission switches the form
//! into its "submitted" state, and once the display delay has passed the
//! caller hands the [`SubmissionTicket`] back to [`FormBuffer::expire`],
//! which clears every field. Tickets from earlier submissions are ignored,
//! so a late timer can never wipe a newer form.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormKind {
    Contact,
    Newsletter,
}

/// Budget choices offered by the contact form.
pub const BUDGET_RANGES: &[&str] = &[
    "$500-1000",
    "$1000-2000",
    "$2000-3000",
    "$3000-5000",
    "$5000+",
    "Need Help Deciding",
];

/// Travel style choices offered by the contact form.
pub const TRAVEL_STYLES: &[&str] = &[
    "Backpacking",
    "Mid-range",
    "Luxury Budget",
    "Solo Travel",
    "Couple Travel",
    "Group Travel",
    "Family Friendly",
    "Adventure Focused",
];

impl FormKind {
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => &[
                "name",
                "email",
                "destination",
                "budget",
                "duration",
                "travelStyle",
                "message",
            ],
            FormKind::Newsletter => &["email"],
        }
    }

    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => &["name", "email"],
            FormKind::Newsletter => &["email"],
        }
    }

    /// How long the success message stays up before the form resets.
    pub fn reset_delay(self) -> Duration {
        match self {
            FormKind::Contact => Duration::from_millis(3000),
            FormKind::Newsletter => Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Unknown form field '{0}'")]
    UnknownField(String),
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),
    #[error("Form already submitted")]
    AlreadySubmitted,
}

/// Identifies one submission so its delayed reset can be matched up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted(SubmissionTicket),
}

/// What a submission looked like, for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub kind: FormKind,
    pub fields: BTreeMap<&'static str, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBuffer {
    kind: FormKind,
    values: BTreeMap<&'static str, String>,
    status: FormStatus,
    submissions: u64,
}

impl FormBuffer {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: empty_values(kind),
            status: FormStatus::Editing,
            submissions: 0,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, FormStatus::Submitted(_))
    }

    /// Current value of `field`; empty for fields the form doesn't have.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let slot = self
            .values
            .get_mut(field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))?;
        *slot = value.into();
        Ok(())
    }

    /// Check the required fields and switch to the submitted state.
    ///
    /// On error nothing changes.
    pub fn submit(&mut self) -> Result<SubmissionTicket, FormError> {
        if self.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }
        if let Some(missing) = self
            .kind
            .required_fields()
            .iter()
            .find(|field| self.get(field).is_empty())
        {
            return Err(FormError::MissingField(*missing));
        }

        self.submissions += 1;
        let ticket = SubmissionTicket(self.submissions);
        self.status = FormStatus::Submitted(ticket);
        Ok(ticket)
    }

    /// Finish the submission identified by `ticket`: clear all fields and
    /// return to editing. Returns `false` and changes nothing if `ticket`
    /// is not the current submission.
    pub fn expire(&mut self, ticket: SubmissionTicket) -> bool {
        if self.status != FormStatus::Submitted(ticket) {
            tracing::debug!(?ticket, "ignoring stale form reset");
            return false;
        }
        self.values = empty_values(self.kind);
        self.status = FormStatus::Editing;
        true
    }

    pub fn submission(&self) -> Submission {
        Submission {
            kind: self.kind,
            fields: self.values.clone(),
        }
    }
}

fn empty_values(kind: FormKind) -> BTreeMap<&'static str, String> {
    kind.fields()
        .iter()
        .map(|field| (*field, String::new()))
        .collect()
}
