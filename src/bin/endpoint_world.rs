use lambda_fixtures::{handlers::endpoint_world, runtime};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    runtime::serve(endpoint_world::handle).await
}
