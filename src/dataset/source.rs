// src/dataset/source.rs
use crate::errors::AppError;
use aws_config::meta::region::RegionProviderChain;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::error::DisplayErrorContext;
use log::{debug, warn};
use reqwest::blocking::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("apartments-map/", env!("CARGO_PKG_VERSION"));
const DEFAULT_S3_REGION: &str = "us-east-1";

/// Where the dataset bytes live.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    Local(String),
    S3 { bucket: String, key: String },
    Http(String),
}

impl DatasetSource {
    pub fn parse(uri: &str) -> Result<Self, AppError> {
        let uri = uri.trim();
        if let Some(rest) = uri.strip_prefix("s3://") {
            let (bucket, key) = rest
                .split_once('/')
                .filter(|(b, k)| !b.is_empty() && !k.is_empty())
                .ok_or_else(|| AppError::DataAccess(format!("invalid S3 URI '{uri}'")))?;
            return Ok(DatasetSource::S3 {
                bucket: bucket.to_string(),
                key: key.to_string(),
            });
        }
        if uri.starts_with("http://") || uri.starts_with("https://") {
            return Ok(DatasetSource::Http(uri.to_string()));
        }
        let path = uri.strip_prefix("file://").unwrap_or(uri);
        Ok(DatasetSource::Local(path.to_string()))
    }

    /// Virtual-hosted HTTPS endpoint of an object, used for anonymous reads.
    /// Key segments are percent-encoded; `/` keeps separating them.
    pub fn s3_url(bucket: &str, key: &str, region: Option<&str>) -> Result<String, AppError> {
        let host = match region {
            Some(region) => format!("https://{bucket}.s3.{region}.amazonaws.com/"),
            None => format!("https://{bucket}.s3.amazonaws.com/"),
        };
        let mut url = Url::parse(&host)
            .map_err(|e| AppError::DataAccess(format!("invalid S3 bucket '{bucket}': {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::DataAccess(format!("invalid S3 bucket '{bucket}'")))?
            .clear()
            .extend(key.split('/'));
        Ok(url.into())
    }

    pub fn fetch(&self, timeout: Duration) -> Result<Vec<u8>, AppError> {
        match self {
            DatasetSource::Local(path) => read_local(path),
            DatasetSource::S3 { bucket, key } => fetch_s3(bucket, key, timeout),
            DatasetSource::Http(url) => fetch_http(url, timeout),
        }
    }
}

/// Signed GetObject with the default AWS credential chain (env, profile,
/// web identity, container and instance metadata). Public objects still load
/// when no credentials are available.
fn fetch_s3(bucket: &str, key: &str, timeout: Duration) -> Result<Vec<u8>, AppError> {
    let signed_err = match fetch_s3_signed(bucket, key, timeout) {
        Ok(data) => return Ok(data),
        Err(e) => e,
    };
    warn!("{signed_err}; retrying s3://{bucket}/{key} anonymously");

    let region = std::env::var("AWS_REGION")
        .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
        .ok();
    let url = DatasetSource::s3_url(bucket, key, region.as_deref())?;
    fetch_http(&url, timeout).map_err(|e| AppError::DataAccess(format!("{signed_err}; {e}")))
}

fn fetch_s3_signed(bucket: &str, key: &str, timeout: Duration) -> Result<Vec<u8>, AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::DataAccess(format!("starting the S3 client failed: {e}")))?;

    runtime.block_on(async {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(RegionProviderChain::default_provider().or_else(DEFAULT_S3_REGION))
            .timeout_config(TimeoutConfig::builder().operation_timeout(timeout).build())
            .load()
            .await;
        let client = aws_sdk_s3::Client::new(&config);

        debug!("GetObject s3://{bucket}/{key}");
        let object = client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::DataAccess(format!(
                    "S3 GetObject s3://{bucket}/{key} failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let body = object.body.collect().await.map_err(|e| {
            AppError::DataAccess(format!("reading s3://{bucket}/{key} failed: {e}"))
        })?;
        Ok(body.into_bytes().to_vec())
    })
}

fn read_local(path: &str) -> Result<Vec<u8>, AppError> {
    if !Path::new(path).is_file() {
        return Err(AppError::DataAccess(format!("'{path}' does not exist")));
    }
    std::fs::read(path).map_err(|e| AppError::DataAccess(format!("reading '{path}' failed: {e}")))
}

fn fetch_http(url: &str, timeout: Duration) -> Result<Vec<u8>, AppError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::DataAccess(e.to_string()))?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| AppError::DataAccess(format!("GET {url} failed: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AppError::DataAccess(format!("GET {url} returned HTTP {status}")));
    }

    let bytes = resp
        .bytes()
        .map_err(|e| AppError::DataAccess(format!("reading body of {url} failed: {e}")))?;
    Ok(bytes.to_vec())
}
