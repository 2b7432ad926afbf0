// Lambda bootstrap entry point for the signup worker

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing, explicitly setting the max level to INFO
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    run(service_fn(signup_worker::worker::handler)).await
}
