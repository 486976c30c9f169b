#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No signed-in user found in client storage")]
    SessionMissing,
    #[error("Stored user profile is not valid: {0}")]
    InvalidProfile(#[from] serde_json::Error),
    #[error("Stored user id is not an integer: {0}")]
    InvalidUserId(String),
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("{}", rejected_message(.status, .message))]
    Rejected { status: u16, message: Option<String> },
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("A shift submission is already in progress")]
    SubmissionInFlight,
    #[error("Invalid base url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Date, start time and end time are required.")]
    MissingFields,
    #[error("The start time must be before the end time.")]
    StartNotBeforeEnd,
    #[error("The date must be a valid calendar date (YYYY-MM-DD).")]
    InvalidDate,
}

fn rejected_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("HTTP error! status: {}", status),
    }
}

impl Error {
    /// The message the backend attached to a rejected request, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_without_message_reports_status() {
        let err = Error::Rejected { status: 500, message: None };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn rejected_with_message_uses_it_verbatim() {
        let err = Error::Rejected {
            status: 404,
            message: Some("User not found".to_string()),
        };
        assert_eq!(err.to_string(), "User not found");
        assert_eq!(err.server_message(), Some("User not found"));
    }
}
