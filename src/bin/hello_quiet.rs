use lambda_fixtures::{handlers::hello_quiet, runtime};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    runtime::serve(hello_quiet::handle).await
}
