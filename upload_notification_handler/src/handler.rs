use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use sns_client::NotificationPublisher;

use crate::model::{ResponseEnvelope, UploadedObject};


/// Forwards the first record of the s3 event to the upload notification topic
#[tracing::instrument(skip(publisher, event), fields(request_id = %event.context.request_id))]
pub async fn handler<P: NotificationPublisher>(
    publisher: &P,
    topic_arn: &str,
    event: LambdaEvent<S3Event>,
) -> Result<ResponseEnvelope, Error> {
    let record_count = event.payload.records.len();
    if record_count > 1 {
        tracing::warn!(
            skipped = record_count - 1,
            "only the first s3 record is forwarded"
        );
    }

    let upload = UploadedObject::from_event(&event.payload)?;
    let notification = upload.notification();

    tracing::info!("{}", notification.message);

    let message_id = publisher
        .publish_notification(topic_arn, notification.subject, &notification.message)
        .await?;

    tracing::trace!(message_id=?message_id, bucket=upload.bucket, key=upload.key, "published upload notification");

    Ok(ResponseEnvelope::success())
}
