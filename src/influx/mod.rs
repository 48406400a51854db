//! Thin service wrapper over the InfluxDB 2.x client.
//!
//! Configuration comes from the same `INFLUXDB_V2_*` environment variables
//! the official clients use.

use chrono::{DateTime, Utc};
use futures::stream;
use influxdb2::models::data_point::FieldValue;
use influxdb2::models::DataPoint;
use influxdb2::Client;

use crate::utils::error::{Error, Result};
use crate::utils::validation::{validate_non_empty_string, validate_required_env};

#[derive(Debug, Clone)]
pub struct InfluxConfig {
    pub url: String,
    pub org: String,
    pub token: String,
}

impl InfluxConfig {
    /// Read `INFLUXDB_V2_URL`, `INFLUXDB_V2_ORG` and `INFLUXDB_V2_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            url: validate_required_env("influxdb url", "INFLUXDB_V2_URL")?,
            org: validate_required_env("influxdb org", "INFLUXDB_V2_ORG")?,
            token: validate_required_env("influxdb token", "INFLUXDB_V2_TOKEN")?,
        })
    }
}

pub struct InfluxDb {
    client: Client,
}

impl InfluxDb {
    pub fn new(config: &InfluxConfig) -> Self {
        Self {
            client: Client::new(&config.url, &config.org, &config.token),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(&InfluxConfig::from_env()?))
    }

    /// Check connectivity against the server's health endpoint.
    pub async fn ping(&self) -> Result<()> {
        self.client.health().await?;
        Ok(())
    }

    /// Write a single point with one field and the given tags.
    pub async fn insert_record(
        &self,
        bucket: &str,
        measurement: &str,
        tags: &[(&str, &str)],
        field: &str,
        value: impl Into<FieldValue>,
        timestamp: DateTime<Utc>,
    ) -> Result<()> {
        validate_non_empty_string("bucket", bucket)?;
        validate_non_empty_string("measurement", measurement)?;

        let point = self.build_point(measurement, tags, field, value.into(), timestamp, 0)?;
        self.client.write(bucket, stream::iter(vec![point])).await?;
        tracing::debug!(bucket, measurement, field, "wrote point");
        Ok(())
    }

    /// Write one point per `(field, value)` pair, all sharing the tags.
    ///
    /// Successive points get a one nanosecond offset so pairs repeating the
    /// same field name do not overwrite each other server-side.
    pub async fn insert_multiple_records<V: Into<FieldValue>>(
        &self,
        bucket: &str,
        measurement: &str,
        tags: &[(&str, &str)],
        fields: Vec<(&str, V)>,
        timestamp: DateTime<Utc>,
    ) -> Result<()> {
        validate_non_empty_string("bucket", bucket)?;
        validate_non_empty_string("measurement", measurement)?;

        let mut points = Vec::with_capacity(fields.len());
        for (offset, (field, value)) in fields.into_iter().enumerate() {
            points.push(self.build_point(
                measurement,
                tags,
                field,
                value.into(),
                timestamp,
                offset as i64,
            )?);
        }
        let count = points.len();
        self.client.write(bucket, stream::iter(points)).await?;
        tracing::debug!(bucket, measurement, count, "wrote points");
        Ok(())
    }

    fn build_point(
        &self,
        measurement: &str,
        tags: &[(&str, &str)],
        field: &str,
        value: FieldValue,
        timestamp: DateTime<Utc>,
        nanosecond_offset: i64,
    ) -> Result<DataPoint> {
        let nanoseconds = timestamp
            .timestamp_nanos_opt()
            .ok_or_else(|| Error::Processing {
                message: format!("timestamp out of range: {timestamp}"),
            })?;

        let mut builder = DataPoint::builder(measurement)
            .field(field, value)
            .timestamp(nanoseconds + nanosecond_offset);
        for (key, tag_value) in tags {
            builder = builder.tag(*key, *tag_value);
        }
        Ok(builder.build()?)
    }
}
