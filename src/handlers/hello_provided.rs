use lambda_http::Request;

use crate::{error::HandlerError, reply::Reply};

pub const BODY: &str = r#"{"message": "Hello Go on provided.al2!"}"#;

pub fn handle(_event: &Request) -> Result<Reply, HandlerError> {
    Ok(Reply::text(200, BODY))
}
