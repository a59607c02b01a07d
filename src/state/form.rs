//! Signup form inputs.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Current values of the email input and the activity select.
///
/// An empty `activity` means the placeholder option is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

/// A validated signup submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

/// Local precondition failure; no request is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter an email and select an activity.")]
    MissingField,
}

impl SignupForm {
    /// Trim the email and require both fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if the trimmed email is empty
    /// or no activity is selected.
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.activity.is_empty() {
            return Err(ValidationError::MissingField);
        }
        Ok(SignupRequest {
            activity: self.activity.clone(),
            email: email.to_owned(),
        })
    }

    /// Back to an empty email and the placeholder selection.
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}
