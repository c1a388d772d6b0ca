use lambda_fixtures::{handlers::endpoint_hello, runtime};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    runtime::serve(endpoint_hello::handle).await
}
