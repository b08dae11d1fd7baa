use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("Invalid argument '{field}' = '{value}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logger initialization failed: {message}")]
    Logger { message: String },
}

impl KataError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::InvalidArgument { field, value, .. } => {
                format!("'{}' cannot be {}", field, value)
            }
            KataError::Logger { .. } => "Logging could not be set up".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KataError::InvalidArgument { .. } => "Pass a count between 0 and 10000000",
            KataError::Logger { .. } => "Initialize the logger only once per process",
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
