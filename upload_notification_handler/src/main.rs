#![recursion_limit = "256"]

use anyhow::Context;
use aws_lambda_events::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use notifier_entrypoint::NotifierEntrypoint;
use upload_notification_handler::{
    config::{Config, load_aws_config},
    handler::handler,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let entrypoint = NotifierEntrypoint::default().init();

    tracing::trace!(environment=%entrypoint.environment(), "initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::trace!("initialized config");

    let aws_config = load_aws_config().await;

    let sns_client = sns_client::SNS::new(aws_sdk_sns::Client::new(&aws_config));
    tracing::trace!("initialized sns client");

    let shared_sns_client = &sns_client;
    let shared_config = &config;

    let func = service_fn(move |event: LambdaEvent<S3Event>| async move {
        handler(shared_sns_client, &shared_config.topic_arn, event).await
    });

    run(func).await
}
