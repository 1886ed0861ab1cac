//! Lambda entrypoint for the HTTP-triggered validate handler.

use std::sync::Arc;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{service_fn, Error, LambdaEvent};

use onboarding_flow::handlers::ValidateRequestHandler;
use onboarding_flow::store::dynamodb::DynamoDbStore;
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
        config.step_results_table,
        config.onboarding_table,
    );
    let handler = Arc::new(ValidateRequestHandler::new(Arc::new(store)));

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| {
            let handler = Arc::clone(&handler);
            async move {
                Ok::<ApiGatewayProxyResponse, Error>(handler.handle(event.payload).await)
            }
        },
    ))
    .await
}
