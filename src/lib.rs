pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod reply;
pub mod runtime;

pub use error::HandlerError;
pub use reply::Reply;
