use lambda_http::Request;

use super::Message;
use crate::{error::HandlerError, reply::Reply};

pub const MESSAGE: &str = "Go Serverless v1.0! Your function executed successfully!";

pub fn handle(_event: &Request) -> Result<Reply, HandlerError> {
    Reply::json(200, &Message { message: MESSAGE })
}
