//! Contact form validation and simulated submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact form has three fields (`name`, `email`, `message`) and a submit
//! button. There is no backend: a valid submission waits a fixed delay, shows
//! a success banner, and resets the form.
//!
//! DESIGN
//! ======
//! [`FormController::handle`] is a pure transition from a [`FormEvent`] to a
//! list of [`FormEffect`]s. Delays are expressed as `Schedule`/`Cancel`
//! effects naming a [`FormTimer`]; the DOM binding owns the actual timer
//! handles and feeds `TimerFired` back in. Because a pending banner expiry is
//! cancelled whenever the banner is replaced or removed, stale timers never
//! touch a newer banner.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::FormConfig;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// A validated contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// The `name` attribute of the field's input element.
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn from_input_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.input_name() == name)
    }

    /// Selector for the field's control, scoped to the form.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Name => r#"input[name="name"]"#,
            Self::Email => r#"input[name="email"]"#,
            Self::Message => r#"textarea[name="message"]"#,
        }
    }
}

/// Why a field value was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("name is shorter than 2 characters")]
    NameTooShort,
    #[error("email address is malformed")]
    InvalidEmail,
    #[error("message is shorter than 10 characters")]
    MessageTooShort,
}

impl FieldError {
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::NameTooShort => Field::Name,
            Self::InvalidEmail => Field::Email,
            Self::MessageTooShort => Field::Message,
        }
    }

    /// User-facing copy for this error.
    #[must_use]
    pub fn user_message(self, copy: &FormConfig) -> &str {
        match self {
            Self::NameTooShort => &copy.name_error,
            Self::InvalidEmail => &copy.email_error,
            Self::MessageTooShort => &copy.message_error,
        }
    }
}

/// Validate a single field value.
///
/// # Errors
///
/// Returns the [`FieldError`] describing the first rule the value breaks.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Name => check_min_chars(value, NAME_MIN_CHARS, FieldError::NameTooShort),
        Field::Email => check_email(&EMAIL_PATTERN, value),
        Field::Message => check_min_chars(value, MESSAGE_MIN_CHARS, FieldError::MessageTooShort),
    }
}

/// An address is accepted only when the pattern compiled and matches.
fn check_email(pattern: &Result<Regex, regex::Error>, value: &str) -> Result<(), FieldError> {
    match pattern {
        Ok(pattern) if pattern.is_match(value) => Ok(()),
        Ok(_) => Err(FieldError::InvalidEmail),
        Err(err) => {
            log::error!("form: email pattern failed to compile: {err}");
            Err(FieldError::InvalidEmail)
        }
    }
}

fn check_min_chars(value: &str, min: usize, err: FieldError) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() < min { Err(err) } else { Ok(()) }
}

/// Raw values read from the form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field outcome of validating a whole submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub name: Result<(), FieldError>,
    pub email: Result<(), FieldError>,
    pub message: Result<(), FieldError>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.name.is_ok() && self.email.is_ok() && self.message.is_ok()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = FieldError> + '_ {
        Field::ALL.into_iter().filter_map(|field| self.get(field).err())
    }
}

#[must_use]
pub fn validate_all(values: &FormValues) -> ValidationReport {
    ValidationReport {
        name: validate_field(Field::Name, &values.name),
        email: validate_field(Field::Email, &values.email),
        message: validate_field(Field::Message, &values.message),
    }
}

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Delayed actions owned by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormTimer {
    /// Simulated network round trip.
    SubmitDelay,
    /// Automatic removal of the status banner.
    BannerExpiry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// Parse the banner kind named by its class, as passed from page scripts.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Submit(FormValues),
    Blur { field: Field, value: String },
    TimerFired(FormTimer),
}

/// DOM mutations and timer requests produced by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEffect {
    ShowError { field: Field, message: String },
    ClearError(Field),
    /// Disable the submit button and swap its label for `label`.
    DisableSubmit { label: String },
    /// Re-enable the submit button with the label it had before `DisableSubmit`.
    EnableSubmit,
    ShowBanner { kind: BannerKind, message: String },
    RemoveBanner,
    ResetFields,
    Schedule { timer: FormTimer, delay_ms: u32 },
    Cancel(FormTimer),
}

/// Contact form state machine.
#[derive(Clone, Debug, Default)]
pub struct FormController {
    copy: FormConfig,
    phase: FormPhase,
    banner: Option<BannerKind>,
}

impl FormController {
    #[must_use]
    pub fn new(copy: FormConfig) -> Self {
        Self { copy, phase: FormPhase::Idle, banner: None }
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn banner(&self) -> Option<BannerKind> {
        self.banner
    }

    pub fn handle(&mut self, event: FormEvent) -> Vec<FormEffect> {
        match event {
            FormEvent::Submit(values) => self.on_submit(&values),
            FormEvent::Blur { field, value } => self.on_blur(field, &value),
            FormEvent::TimerFired(FormTimer::SubmitDelay) => self.on_submit_complete(),
            FormEvent::TimerFired(FormTimer::BannerExpiry) => self.on_banner_expired(),
        }
    }

    /// Show a status banner, replacing any current one, and arm its expiry.
    pub fn show_banner(&mut self, kind: BannerKind, message: impl Into<String>) -> Vec<FormEffect> {
        let mut effects = self.dismiss_banner();
        effects.push(FormEffect::ShowBanner { kind, message: message.into() });
        effects.push(FormEffect::Schedule { timer: FormTimer::BannerExpiry, delay_ms: self.copy.banner_ttl_ms });
        self.banner = Some(kind);
        effects
    }

    fn on_submit(&mut self, values: &FormValues) -> Vec<FormEffect> {
        if self.phase == FormPhase::Submitting {
            log::debug!("form: submit ignored while a submission is pending");
            return Vec::new();
        }

        let mut effects = self.dismiss_banner();
        let report = validate_all(values);
        for field in Field::ALL {
            effects.push(self.field_effect(field, report.get(field)));
        }

        if report.is_valid() {
            self.phase = FormPhase::Submitting;
            effects.push(FormEffect::DisableSubmit { label: self.copy.sending_label.clone() });
            effects.push(FormEffect::Schedule { timer: FormTimer::SubmitDelay, delay_ms: self.copy.submit_delay_ms });
        } else {
            log::debug!("form: rejected submission with {} invalid field(s)", report.errors().count());
        }
        effects
    }

    fn on_blur(&self, field: Field, value: &str) -> Vec<FormEffect> {
        if value.trim().is_empty() {
            return Vec::new();
        }
        vec![self.field_effect(field, validate_field(field, value))]
    }

    fn on_submit_complete(&mut self) -> Vec<FormEffect> {
        if self.phase != FormPhase::Submitting {
            return Vec::new();
        }
        self.phase = FormPhase::Idle;
        let message = self.copy.success_message.clone();
        let mut effects = self.show_banner(BannerKind::Success, message);
        effects.push(FormEffect::ResetFields);
        effects.push(FormEffect::EnableSubmit);
        effects
    }

    fn on_banner_expired(&mut self) -> Vec<FormEffect> {
        if self.banner.take().is_none() {
            return Vec::new();
        }
        vec![FormEffect::RemoveBanner]
    }

    fn dismiss_banner(&mut self) -> Vec<FormEffect> {
        if self.banner.take().is_none() {
            return Vec::new();
        }
        vec![FormEffect::Cancel(FormTimer::BannerExpiry), FormEffect::RemoveBanner]
    }

    fn field_effect(&self, field: Field, outcome: Result<(), FieldError>) -> FormEffect {
        match outcome {
            Ok(()) => FormEffect::ClearError(field),
            Err(err) => FormEffect::ShowError { field, message: err.user_message(&self.copy).to_owned() },
        }
    }
}

/// Class of the inline error node appended next to an invalid field.
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
/// Class of the status banner appended to the form.
pub const BANNER_CLASS: &str = "form-message";
