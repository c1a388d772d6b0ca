use lambda_http::{run, service_fn, Body, Error, Request, Response};

use crate::{config::LogConfig, handlers::HandlerFn, logging};

/// Runs `handler` once for `event` and converts the reply for the runtime.
pub async fn invoke(handler: HandlerFn, event: Request) -> Result<Response<Body>, Error> {
    let reply = handler(&event)?;

    Ok(Response::try_from(reply)?)
}

/// Process entry point shared by every fixture binary.
///
/// Diagnostics go to stderr; the response only ever leaves through the
/// runtime API.
pub async fn serve(handler: HandlerFn) -> Result<(), Error> {
    let config = LogConfig::from_env();
    logging::init(&config)?;

    tracing::debug!(level = %config.level, format = ?config.format, "starting runtime loop");

    run(service_fn(move |event: Request| invoke(handler, event))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::HandlerError, reply::Reply};

    fn failing(_event: &Request) -> Result<Reply, HandlerError> {
        Err(HandlerError::failed("no reply"))
    }

    #[tokio::test]
    async fn test_invoke_converts_reply() {
        let response = invoke(crate::handlers::pong::handle, Request::new(Body::Empty))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), &Body::Text("Pong Work".to_string()));
    }

    #[tokio::test]
    async fn test_invoke_propagates_handler_failure() {
        let err = invoke(failing, Request::new(Body::Empty)).await.unwrap_err();
        assert_eq!(err.to_string(), "Handler Failed: no reply");
    }
}
