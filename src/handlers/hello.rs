use lambda_http::Request;

use crate::{error::HandlerError, reply::Reply};

pub const BODY: &str = r#"{"message": "Hello Go 1.x!"}"#;

/// Same reply as [`hello_quiet`](super::hello_quiet), plus one diagnostic line.
pub fn handle(_event: &Request) -> Result<Reply, HandlerError> {
    tracing::info!("hello handler invoked");

    Ok(Reply::text(200, BODY))
}

#[cfg(test)]
mod tests {
    use lambda_http::Body;

    use super::*;
    use crate::{config::LogConfig, logging::capture::Capture, logging::subscriber};

    #[test]
    fn test_hello_logs_outside_the_body() {
        let capture = Capture::default();
        let sink = capture.clone();
        let subscriber = subscriber(&LogConfig::default(), move || sink.clone());

        let reply = tracing::subscriber::with_default(subscriber, || {
            handle(&Request::new(Body::Empty)).unwrap()
        });

        assert_eq!(reply.status_code, 200);
        assert_eq!(reply.body, "{\"message\": \"Hello Go 1.x!\"}");
        assert!(reply.headers.is_empty());

        let logs = capture.contents();
        assert!(logs.contains("hello handler invoked"));
        assert!(!reply.body.contains("hello handler invoked"));
    }
}
