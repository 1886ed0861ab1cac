//! Lambda entrypoint for the HTTP-triggered start handler.

use std::sync::Arc;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{service_fn, Error, LambdaEvent};

use onboarding_flow::handlers::StartOnboardingHandler;
use onboarding_flow::signal::sfn::SfnSignaler;
use onboarding_flow::FlowConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let config = FlowConfig::from_env();
    let arn = config
        .state_machine_arn
        .ok_or("STATE_MACHINE_ARN is not set")?;

    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let signaler = SfnSignaler::new(aws_sdk_sfn::Client::new(&aws), Some(arn));
    let handler = Arc::new(StartOnboardingHandler::new(Arc::new(signaler)));

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
