pub mod clock;
pub mod messaging;
pub mod request;
pub mod sender;
