mod auth;
mod error_handler;

pub use auth::{CLIENT_ID_HEADER, attach_credentials};
pub use error_handler::classify_response;
