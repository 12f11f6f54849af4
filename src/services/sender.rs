use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{OutboundMessage, ProviderResponse};
use crate::services::clock::Clock;
use crate::services::messaging::MessagingProvider;
use crate::services::request::build_request;

/// Sends the configured message once. A provider error status is returned as
/// `ProviderResponse::Rejected`, not as an `Err`.
pub async fn send_message(
    provider: &dyn MessagingProvider,
    clock: &dyn Clock,
    config: &AppConfig,
) -> Result<ProviderResponse, AppError> {
    let message = OutboundMessage::from_config(config);
    let request = build_request(config, &message, clock.now())?;

    tracing::info!(
        url = %request.url,
        send_at = %request.send_at,
        from = %message.from,
        to = %message.to,
        "sending SMS"
    );

    let response = provider.send(&request).await?;

    if response.is_accepted() {
        tracing::info!(status = response.status(), "provider accepted message");
    } else {
        tracing::warn!(
            status = response.status(),
            body = %response.body(),
            "provider rejected message"
        );
    }

    Ok(response)
}

/// The single line printed to stdout for a decoded response: compact JSON.
pub fn render_response(response: &ProviderResponse) -> String {
    response.body().to_string()
}
