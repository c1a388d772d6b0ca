use lambda_fixtures::{handlers::pong, runtime};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    runtime::serve(pong::handle).await
}
