// Enquiry form
//
// Trade enquiry form with a simulated submission. Submitting checks the
// required fields, waits a fixed delay and then reports success as a toast.
// Field values are never sent or stored anywhere.

use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::info;

/// Artificial delay before a submission resolves
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Message shown once a submission resolves
pub const SUCCESS_MESSAGE: &str = "Enquiry submitted successfully! We will get back to you soon.";

/// Longest value accepted for a single-line field
const MAX_LINE_LEN: usize = 120;

/// Longest value accepted for the requirement field
const MAX_TEXT_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Multiline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    fn max_len(&self) -> usize {
        match self.kind {
            FieldKind::Multiline => MAX_TEXT_LEN,
            _ => MAX_LINE_LEN,
        }
    }
}

pub static FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        name: "name",
        label: "Your Name",
        placeholder: "John Doe",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "company",
        label: "Company Name",
        placeholder: "ABC Industries",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        placeholder: "john@company.com",
        required: true,
        kind: FieldKind::Email,
    },
    FieldSpec {
        name: "phone",
        label: "Phone Number",
        placeholder: "+91 98765 43210",
        required: true,
        kind: FieldKind::Phone,
    },
    FieldSpec {
        name: "country",
        label: "Country",
        placeholder: "India",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "quantity",
        label: "Quantity",
        placeholder: "1000 units",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "requirement",
        label: "Product Requirement",
        placeholder: "Describe the products you're looking for...",
        required: true,
        kind: FieldKind::Multiline,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnquiryError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),

    #[error("an enquiry is already being submitted")]
    AlreadySubmitting,

    #[error("no field named `{0}`")]
    UnknownField(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

impl Toast {
    pub fn success(message: &str, now: Instant) -> Self {
        Self {
            message: message.to_string(),
            kind: ToastKind::Success,
            shown_at: now,
        }
    }

    pub fn error(message: String, now: Instant) -> Self {
        Self {
            message,
            kind: ToastKind::Error,
            shown_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting { resolves_at: Instant },
}

#[derive(Debug, Clone)]
pub struct EnquiryForm {
    values: Vec<String>,
    focused: usize,
    state: SubmitState,
}

impl EnquiryForm {
    pub fn new() -> Self {
        Self {
            values: vec![String::new(); FIELDS.len()],
            focused: 0,
            state: SubmitState::Idle,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&FieldSpec, &str)> {
        FIELDS.iter().zip(self.values.iter().map(String::as_str))
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        FIELDS
            .iter()
            .position(|f| f.name == name)
            .map(|idx| self.values[idx].as_str())
    }

    pub fn set_value(&mut self, name: &str, value: &str) -> Result<(), EnquiryError> {
        let idx = FIELDS
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| EnquiryError::UnknownField(name.to_string()))?;
        self.values[idx] = value.chars().take(FIELDS[idx].max_len()).collect();
        Ok(())
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_field(&self) -> &FieldSpec {
        &FIELDS[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FIELDS.len();
    }

    pub fn focus_previous(&mut self) {
        self.focused = (self.focused + FIELDS.len() - 1) % FIELDS.len();
    }

    /// Type a character into the focused field
    ///
    /// Ignored while a submission is pending or once the field is full.
    pub fn insert_char(&mut self, c: char) {
        if self.is_submitting() || c.is_control() {
            return;
        }
        let max = FIELDS[self.focused].max_len();
        let value = &mut self.values[self.focused];
        if value.chars().count() < max {
            value.push(c);
        }
    }

    /// Append pasted text to the focused field
    ///
    /// Line breaks become spaces outside the multiline field; other control
    /// characters are dropped. The field length limit still applies.
    pub fn paste(&mut self, text: &str) {
        if self.is_submitting() {
            return;
        }
        let spec = self.focused_field();
        let multiline = spec.kind == FieldKind::Multiline;
        let name = spec.name;

        let mut value = self.value(name).unwrap_or_default().to_string();
        for c in text.chars() {
            match c {
                '\n' if multiline => value.push('\n'),
                '\r' => {}
                '\n' | '\t' => value.push(' '),
                c if c.is_control() => {}
                c => value.push(c),
            }
        }
        // `name` comes from FIELDS, so the lookup cannot miss
        let _ = self.set_value(name, &value);
    }

    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.values[self.focused].pop();
    }

    /// Check required fields and the email shape
    pub fn validate(&self) -> Result<(), EnquiryError> {
        for (spec, value) in self.fields() {
            let value = value.trim();
            if spec.required && value.is_empty() {
                return Err(EnquiryError::MissingField(spec.label));
            }
            if spec.kind == FieldKind::Email && !value.is_empty() && !is_email(value) {
                return Err(EnquiryError::InvalidEmail(value.to_string()));
            }
        }
        Ok(())
    }

    /// Begin a simulated submission that resolves after `SUBMIT_DELAY`
    pub fn submit(&mut self, now: Instant) -> Result<(), EnquiryError> {
        if self.is_submitting() {
            return Err(EnquiryError::AlreadySubmitting);
        }
        self.validate()?;

        self.state = SubmitState::Submitting {
            resolves_at: now + SUBMIT_DELAY,
        };
        info!(
            filled = self.values.iter().filter(|v| !v.trim().is_empty()).count(),
            "Enquiry submission started"
        );
        Ok(())
    }

    /// Resolve a pending submission once its delay has passed
    ///
    /// Returns the success toast exactly once and resets the form.
    pub fn poll(&mut self, now: Instant) -> Option<Toast> {
        match self.state {
            SubmitState::Submitting { resolves_at } if now >= resolves_at => {
                self.reset();
                info!("Enquiry submission resolved");
                Some(Toast::success(SUCCESS_MESSAGE, now))
            }
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting { .. })
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn reset(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        self.focused = 0;
        self.state = SubmitState::Idle;
    }
}

impl Default for EnquiryForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape check in the spirit of an `type="email"` input: one `@`, text on
/// both sides, a dot in the domain, no whitespace
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EnquiryForm {
        let mut form = EnquiryForm::new();
        form.set_value("name", "John Doe").unwrap();
        form.set_value("company", "ABC Industries").unwrap();
        form.set_value("email", "john@company.com").unwrap();
        form.set_value("phone", "+91 98765 43210").unwrap();
        form.set_value("country", "India").unwrap();
        form.set_value("requirement", "5000 units of stainless fittings").unwrap();
        form
    }

    #[test]
    fn test_required_fields() {
        let form = EnquiryForm::new();
        assert_eq!(form.validate(), Err(EnquiryError::MissingField("Your Name")));

        // Quantity is optional
        let form = filled_form();
        assert_eq!(form.value("quantity"), Some(""));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let mut form = filled_form();
        form.set_value("country", "   ").unwrap();
        assert_eq!(form.validate(), Err(EnquiryError::MissingField("Country")));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email("a@b.co"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a b@c.de"));
        assert!(!is_email("a@@b.co"));
        assert!(!is_email("a@.co"));

        let mut form = filled_form();
        form.set_value("email", "not-an-email").unwrap();
        assert!(matches!(form.validate(), Err(EnquiryError::InvalidEmail(_))));
    }

    #[test]
    fn test_submit_resolves_after_delay() {
        let mut form = filled_form();
        let t0 = Instant::now();

        form.submit(t0).unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.poll(t0 + Duration::from_millis(1499)), None);

        let toast = form.poll(t0 + SUBMIT_DELAY).unwrap();
        assert_eq!(toast.message, SUCCESS_MESSAGE);
        assert_eq!(toast.kind, ToastKind::Success);

        // Form is reset and the toast is delivered once
        assert!(!form.is_submitting());
        assert_eq!(form.value("name"), Some(""));
        assert_eq!(form.poll(t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled_form();
        let t0 = Instant::now();
        form.submit(t0).unwrap();
        assert_eq!(form.submit(t0), Err(EnquiryError::AlreadySubmitting));
    }

    #[test]
    fn test_invalid_form_does_not_submit() {
        let mut form = EnquiryForm::new();
        assert!(form.submit(Instant::now()).is_err());
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn test_editing_and_focus() {
        let mut form = EnquiryForm::new();
        assert_eq!(form.focused_field().name, "name");

        for c in "Jo".chars() {
            form.insert_char(c);
        }
        form.insert_char('\n');
        form.backspace();
        assert_eq!(form.value("name"), Some("J"));

        form.focus_previous();
        assert_eq!(form.focused_field().name, "requirement");
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused_field().name, "company");
    }

    #[test]
    fn test_input_locked_while_submitting() {
        let mut form = filled_form();
        form.submit(Instant::now()).unwrap();
        form.insert_char('x');
        form.backspace();
        assert_eq!(form.value("name"), Some("John Doe"));
    }

    #[test]
    fn test_field_length_limit() {
        let mut form = EnquiryForm::new();
        let long = "x".repeat(MAX_LINE_LEN + 10);
        form.set_value("name", &long).unwrap();
        assert_eq!(form.value("name").map(str::len), Some(MAX_LINE_LEN));

        form.insert_char('y');
        assert_eq!(form.value("name").map(str::len), Some(MAX_LINE_LEN));
    }

    #[test]
    fn test_unknown_field() {
        let mut form = EnquiryForm::new();
        assert_eq!(form.value("fax"), None);
        assert!(matches!(
            form.set_value("fax", "1"),
            Err(EnquiryError::UnknownField(_))
        ));
    }

    #[test]
    fn test_toast_expiry() {
        let t0 = Instant::now();
        let toast = Toast::success(SUCCESS_MESSAGE, t0);
        assert!(!toast.is_expired(t0 + Duration::from_secs(3)));
        assert!(toast.is_expired(t0 + TOAST_DURATION));
    }

    #[test]
    fn test_paste_appends_to_focused_field() {
        let mut form = EnquiryForm::new();
        form.insert_char('J');
        form.paste("ohn\r\nDoe");
        assert_eq!(form.value("name"), Some("John Doe"));

        // The requirement field keeps its line breaks
        while form.focused_field().kind != FieldKind::Multiline {
            form.focus_next();
        }
        form.paste("line one\nline two\u{7}");
        assert_eq!(form.value("requirement"), Some("line one\nline two"));
    }

    #[test]
    fn test_paste_respects_limits_and_submission() {
        let mut form = EnquiryForm::new();
        form.paste(&"x".repeat(MAX_LINE_LEN + 30));
        assert_eq!(form.value("name").map(str::len), Some(MAX_LINE_LEN));

        let mut form = filled_form();
        let t0 = Instant::now();
        form.submit(t0).unwrap();
        assert!(matches!(form.state(), SubmitState::Submitting { .. }));
        form.paste(" extra");
        assert_eq!(form.value("name"), Some("John Doe"));
    }
}
