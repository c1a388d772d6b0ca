use lambda_http::Request;

use super::Message;
use crate::{error::HandlerError, reply::Reply};

pub const MESSAGE: &str = "Okay so your other function also executed successfully!";

pub fn handle(_event: &Request) -> Result<Reply, HandlerError> {
    Reply::json(200, &Message { message: MESSAGE })
}

#[cfg(test)]
mod tests {
    use lambda_http::Body;

    use super::*;

    #[test]
    fn test_endpoint_world_repeats_identically() {
        let first = handle(&Request::new(Body::Empty)).unwrap();
        for _ in 0..3 {
            assert_eq!(handle(&Request::new(Body::Empty)).unwrap(), first);
        }

        let body: serde_json::Value = serde_json::from_str(&first.body).unwrap();
        assert_eq!(body["message"], MESSAGE);
    }
}
