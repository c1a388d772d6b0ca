pub mod endpoint_hello;
pub mod endpoint_world;
pub mod hello;
pub mod hello_provided;
pub mod hello_quiet;
pub mod pong;

use lambda_http::Request;
use serde::Serialize;

use crate::{error::HandlerError, reply::Reply};

/// A fixture handler: one request in, one reply (or failure) out, no state.
pub type HandlerFn = fn(&Request) -> Result<Reply, HandlerError>;

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub message: &'a str,
}
