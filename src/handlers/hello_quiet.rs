use lambda_http::Request;

use crate::{error::HandlerError, reply::Reply};

pub fn handle(_event: &Request) -> Result<Reply, HandlerError> {
    Ok(Reply::text(200, super::hello::BODY))
}
