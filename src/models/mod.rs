pub mod message;
pub mod response;

pub use message::OutboundMessage;
pub use response::ProviderResponse;
