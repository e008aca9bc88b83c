use lambda_runtime::{run, service_fn, Error};

use service_cost_breakdown::api::handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        // CloudWatch ingests one JSON object per line
        .json()
        .init();

    run(service_fn(function_handler)).await
}
