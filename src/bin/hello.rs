use lambda_fixtures::{handlers::hello, runtime};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    runtime::serve(hello::handle).await
}
