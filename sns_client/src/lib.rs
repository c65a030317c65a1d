//! Thin wrapper around [aws_sdk_sns::Client] and the [NotificationPublisher] port used by the
//! notifier lambdas.

use anyhow::Context;

/// Anything that can deliver a notification with a subject to a pub/sub topic.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationPublisher: Send + Sync + 'static {
    /// publish `message` with `subject` to the topic identified by `topic_arn`.
    /// Returns the message id assigned by the topic, if any
    fn publish_notification(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
}

#[derive(Clone, Debug)]
pub struct SNS {
    inner: aws_sdk_sns::Client,
}

impl SNS {
    pub fn new(inner: aws_sdk_sns::Client) -> Self {
        Self { inner }
    }

    /// Publishes a message with a subject line. The subject is used by email subscriptions.
    ///
    /// # Subject Requirements
    ///
    /// * ASCII text beginning with a letter, number, or punctuation mark
    /// * No line breaks or control characters
    /// * Fewer than 100 characters
    #[tracing::instrument(skip(self, message), err)]
    pub async fn publish_with_subject(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> anyhow::Result<Option<String>> {
        let output = self
            .inner
            .publish()
            .topic_arn(topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .context("unable to publish message to topic")?;

        Ok(output.message_id().map(|id| id.to_string()))
    }
}

impl NotificationPublisher for SNS {
    async fn publish_notification(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> anyhow::Result<Option<String>> {
        self.publish_with_subject(topic_arn, subject, message).await
    }
}
