mod s3;
mod sts;

pub use s3::S3ObjectStore;
pub use sts::StsIdentityProbe;

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Loads the shared AWS configuration from the default provider chain,
/// optionally pinned to a region and an S3-compatible endpoint.
pub async fn load_sdk_config(region: Option<&str>, endpoint_url: Option<&str>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_owned()));
    }

    if let Some(endpoint_url) = endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    loader.load().await
}
