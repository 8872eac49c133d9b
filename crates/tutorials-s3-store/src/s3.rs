use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;

use tutorials_core::ObjectStore;

/// Object store backed by a single S3 bucket.
#[derive(Clone, Debug)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(sdk_config: &SdkConfig, bucket: impl Into<String>, force_path_style: bool) -> Self {
        let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
            .force_path_style(force_path_style)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    #[tracing::instrument(name = "s3::get", skip(self))]
    async fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        let output = match response {
            Ok(output) => output,
            Err(err) => {
                let service_error = err.into_service_error();
                if service_error.is_no_such_key() {
                    return Ok(None);
                }

                return Err(service_error.into());
            }
        };

        let payload = output.body.collect().await?.into_bytes();

        Ok(Some(payload.to_vec()))
    }

    #[tracing::instrument(name = "s3::put", skip(self, payload))]
    async fn put(&self, key: &str, payload: Vec<u8>) -> anyhow::Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("application/json")
            .body(payload.into())
            .send()
            .await
            .map_err(|err| err.into_service_error())?;

        Ok(())
    }

    #[tracing::instrument(name = "s3::delete", skip(self))]
    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| err.into_service_error())?;

        Ok(())
    }

    #[tracing::instrument(name = "s3::list_keys", skip(self))]
    async fn list_keys(&self, prefix: &str) -> anyhow::Result<Vec<String>> {
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .into_paginator()
            .send();

        let mut keys = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|err| err.into_service_error())?;

            keys.extend(
                page.contents()
                    .iter()
                    .filter_map(|object| object.key())
                    .map(str::to_owned),
            );
        }

        Ok(keys)
    }
}
