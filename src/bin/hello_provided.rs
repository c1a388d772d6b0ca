use lambda_fixtures::{handlers::hello_provided, runtime};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    runtime::serve(hello_provided::handle).await
}
