use serde_json::Value;

/// Decoded provider reply. The body shape belongs to the provider and is
/// kept untyped; only the status decides the branch.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResponse {
    Accepted { status: u16, body: Value },
    Rejected { status: u16, body: Value },
}

impl ProviderResponse {
    pub fn from_parts(status: u16, body: Value) -> Self {
        if (200..300).contains(&status) {
            ProviderResponse::Accepted { status, body }
        } else {
            ProviderResponse::Rejected { status, body }
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ProviderResponse::Accepted { status, .. } | ProviderResponse::Rejected { status, .. } => {
                *status
            }
        }
    }

    pub fn body(&self) -> &Value {
        match self {
            ProviderResponse::Accepted { body, .. } | ProviderResponse::Rejected { body, .. } => body,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ProviderResponse::Accepted { .. })
    }
}
