use aws_lambda_events::s3::S3Event;
use serde_json::json;

/// A single `ObjectCreated:Put` record as delivered by s3
pub fn put_record(bucket: &str, key: &str) -> serde_json::Value {
    json!({
        "eventVersion": "2.1",
        "eventSource": "aws:s3",
        "awsRegion": "us-east-1",
        "eventTime": "2024-01-01T00:00:00.000Z",
        "eventName": "ObjectCreated:Put",
        "userIdentity": { "principalId": "EXAMPLE" },
        "requestParameters": { "sourceIPAddress": "127.0.0.1" },
        "responseElements": {
            "x-amz-request-id": "EXAMPLE123456789",
            "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
        },
        "s3": {
            "s3SchemaVersion": "1.0",
            "configurationId": "upload-notifications",
            "bucket": {
                "name": bucket,
                "ownerIdentity": { "principalId": "EXAMPLE" },
                "arn": format!("arn:aws:s3:::{bucket}")
            },
            "object": {
                "key": key,
                "size": 1024,
                "eTag": "0123456789abcdef0123456789abcdef",
                "sequencer": "0A1B2C3D4E5F678901"
            }
        }
    })
}

pub fn event_from_records(records: Vec<serde_json::Value>) -> S3Event {
    serde_json::from_value(json!({ "Records": records })).unwrap()
}

pub fn put_event(bucket: &str, key: &str) -> S3Event {
    event_from_records(vec![put_record(bucket, key)])
}

/// removes `field` from the `s3.<entity>` object of the record
pub fn without_field(mut record: serde_json::Value, entity: &str, field: &str) -> serde_json::Value {
    if let Some(obj) = record["s3"][entity].as_object_mut() {
        obj.remove(field);
    }
    record
}
