//! Lambda entrypoint for the continuation resolver.
//!
//! Triggered externally with a stored task token. Always reports a string
//! outcome; the invocation itself never fails.

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};

use onboarding_flow::handlers::ResolveTokenHandler;
use onboarding_flow::signal::sfn::SfnSignaler;
use onboarding_flow::types::ResolveTaskEvent;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let signaler = SfnSignaler::from_env().await;
    let handler = Arc::new(ResolveTokenHandler::new(Arc::new(signaler)));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ResolveTaskEvent>| {
        let handler = Arc::clone(&handler);
        async move { Ok::<String, Error>(handler.handle(event.payload).await) }
    }))
    .await
}
