//! User domain model

/// A user account as seen by the service layer.
///
/// `id` is `None` until the service persists the user for the first time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<i64>,
    pub login_name: String,
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Create a user that has not been persisted yet
    pub fn new(login_name: impl Into<String>) -> Self {
        Self {
            id: None,
            login_name: login_name.into(),
            email_address: None,
            first_name: None,
            last_name: None,
        }
    }

    /// Builder-style setter for the email address
    pub fn with_email(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = Some(email_address.into());
        self
    }

    /// Builder-style setter for first and last name
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }
}
