//! Lambda entrypoint for the continuation registrar.
//!
//! Triggered by the orchestrator's callback task with a task token and
//! the onboarding payload. A returned error marks the invocation failed.

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};

use onboarding_flow::handlers::RegisterTokenHandler;
use onboarding_flow::signal::sfn::SfnSignaler;
use onboarding_flow::store::dynamodb::DynamoDbStore;
use onboarding_flow::types::TaskTokenEvent;
use onboarding_flow::FlowConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let config = FlowConfig::from_env();
    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    let store = DynamoDbStore::new(
        aws_sdk_dynamodb::Client::new(&aws),
        config.step_results_table.clone(),
        config.onboarding_table.clone(),
    );
    let signaler = SfnSignaler::new(aws_sdk_sfn::Client::new(&aws), config.state_machine_arn);
    let handler = Arc::new(RegisterTokenHandler::new(
        Arc::new(store),
        Arc::new(signaler),
    ));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<TaskTokenEvent>| {
        let handler = Arc::clone(&handler);
        async move { handler.handle(event.payload).await.map_err(Error::from) }
    }))
    .await
}
