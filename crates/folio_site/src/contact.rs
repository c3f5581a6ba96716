//! The contact form.
//!
//! Nothing is sent anywhere. Submitting shows a confirmation for three
//! seconds, then the form empties itself.

use folio_shared::constants::CONTACT_RESET_MS;

/// Form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Sender name.
    Name,
    /// Sender email.
    Email,
    /// Message body.
    Message,
}

impl ContactField {
    /// Parses a field name: `name`, `email` or `message`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

/// Contact form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    /// When the current confirmation started.
    submitted_at: Option<f64>,
}

impl ContactForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a field's text.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// A field's text.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// True while the confirmation is shown.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    /// Submits the form. Ignored while a confirmation is already showing.
    ///
    /// Returns true if this call started a confirmation.
    pub fn submit(&mut self, now_ms: f64) -> bool {
        if self.is_submitted() {
            return false;
        }
        self.submitted_at = Some(now_ms);
        tracing::debug!(at_ms = now_ms, "contact form submitted");
        true
    }

    /// Clears the form once the confirmation has run its course.
    ///
    /// Returns true if the form was reset by this call.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.submitted_at {
            Some(at) if now_ms - at >= CONTACT_RESET_MS => {
                *self = Self::default();
                true
            }
            _ => false,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Message, "Hello");
        form
    }

    #[test]
    fn test_reset_exactly_after_three_seconds() {
        let mut form = filled();
        assert!(form.submit(1_000.0));

        assert!(!form.tick(3_999.0));
        assert!(form.is_submitted());
        assert_eq!(form.get(ContactField::Name), "Ada");

        assert!(form.tick(4_000.0));
        assert!(!form.is_submitted());
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ContactField::parse("email"), Some(ContactField::Email));
        assert_eq!(ContactField::parse("phone"), None);
    }

    #[test]
    fn test_double_submit_ignored() {
        let mut form = filled();
        assert!(form.submit(0.0));
        assert!(!form.submit(2_000.0));

        // Reset timer still counts from the first submit
        assert!(form.tick(3_000.0));
    }

    #[test]
    fn test_tick_without_submit() {
        let mut form = filled();
        assert!(!form.tick(10_000.0));
        assert_eq!(form.get(ContactField::Message), "Hello");
    }
}
