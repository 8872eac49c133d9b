use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sts::Client;

use tutorials_core::{CallerIdentity, IdentityProbe};

#[derive(Clone, Debug)]
pub struct StsIdentityProbe {
    client: Client,
}

impl StsIdentityProbe {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl IdentityProbe for StsIdentityProbe {
    #[tracing::instrument(name = "sts::get_caller_identity", skip(self))]
    async fn caller_identity(&self) -> anyhow::Result<CallerIdentity> {
        let output = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|err| err.into_service_error())?;

        Ok(CallerIdentity {
            account: output.account().map(str::to_owned),
            arn: output.arn().map(str::to_owned),
            user_id: output.user_id().map(str::to_owned),
        })
    }
}
