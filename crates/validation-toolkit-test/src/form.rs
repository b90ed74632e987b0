//! Sign-up form fixture.

/// A typical multi-field form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub newsletter: bool,
    pub age: u32,
}

impl SignupForm {
    /// Creates a form that passes every rule used in the tests.
    pub fn valid() -> Self {
        Self {
            email: "ada@example.com".to_string(),
            password: "correct-horse".to_string(),
            password_confirmation: "correct-horse".to_string(),
            newsletter: true,
            age: 36,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_password_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.password_confirmation = confirmation.into();
        self
    }

    pub fn with_newsletter(mut self, newsletter: bool) -> Self {
        self.newsletter = newsletter;
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Returns true if the email field contains something other than whitespace.
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    /// Loose email shape check: one `@` with text on both sides and a dot in the domain.
    pub fn email_looks_valid(&self) -> bool {
        match self.email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.contains('@')
            }
            None => false,
        }
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirmation
    }
}
