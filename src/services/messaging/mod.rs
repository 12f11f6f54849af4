pub mod httpsms;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::ProviderResponse;
use crate::services::request::SendRequest;

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    async fn send(&self, request: &SendRequest) -> Result<ProviderResponse, AppError>;
}
