use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Body of a single `POST /v1/messages/send` call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutboundMessage {
    pub content: String,
    pub from: String,
    pub to: String,
}

impl OutboundMessage {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            content: config.content.clone(),
            from: config.from_number.clone(),
            to: config.to_number.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for number in [&self.from, &self.to] {
            if !is_e164(number) {
                return Err(AppError::InvalidPhone(number.clone()));
            }
        }
        Ok(())
    }
}

/// `+` followed by 8 to 15 digits, no leading zero after the plus.
pub fn is_e164(number: &str) -> bool {
    let Some(digits) = number.strip_prefix('+') else {
        return false;
    };
    (8..=15).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
        && !digits.starts_with('0')
}
