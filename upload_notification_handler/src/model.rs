use aws_lambda_events::s3::S3Event;
use thiserror::Error;


/// The subject attached to every upload notification
pub const NOTIFICATION_SUBJECT: &str = "New file added to S3 bucket";

/// The message returned to the lambda runtime when the notification was published
pub const SUCCESS_MESSAGE: &str = "Lambda function executed successfully !!";

/// The reasons an [S3Event] cannot be turned into an [UploadedObject]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadEventErr {
    #[error("s3 event contained no records")]
    NoRecords,
    #[error("expected bucket")]
    MissingBucket,
    #[error("expected key")]
    MissingKey,
}

/// The bucket and key of the object referenced by an upload event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadedObject<'a> {
    pub bucket: &'a str,
    pub key: &'a str,
}

impl<'a> UploadedObject<'a> {
    /// Reads the first record of the event. Any further records are not inspected
    pub fn from_event(event: &'a S3Event) -> Result<Self, UploadEventErr> {
        let record = event.records.first().ok_or(UploadEventErr::NoRecords)?;

        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .ok_or(UploadEventErr::MissingBucket)?;
        let key = record
            .s3
            .object
            .key
            .as_deref()
            .ok_or(UploadEventErr::MissingKey)?;

        Ok(Self { bucket, key })
    }

    pub fn notification(&self) -> NotificationMessage {
        NotificationMessage {
            subject: NOTIFICATION_SUBJECT,
            message: format!("File '{}' will be uploaded to '{}'", self.key, self.bucket),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: &'static str,
    pub message: String,
}

/// The response handed back to the lambda runtime
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    /// json encoded string
    pub body: String,
}

impl ResponseEnvelope {
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: serde_json::Value::from(SUCCESS_MESSAGE).to_string(),
        }
    }
}
