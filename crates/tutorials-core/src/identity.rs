use async_trait::async_trait;
use std::fmt;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CallerIdentity {
    pub account: Option<String>,
    pub arn: Option<String>,
    pub user_id: Option<String>,
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "account={} arn={} user_id={}",
            self.account.as_deref().unwrap_or("-"),
            self.arn.as_deref().unwrap_or("-"),
            self.user_id.as_deref().unwrap_or("-"),
        )
    }
}

/// Reports which credentials the process is running as. Diagnostic only.
#[async_trait]
pub trait IdentityProbe: Send + Sync {
    async fn caller_identity(&self) -> anyhow::Result<CallerIdentity>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let identity = CallerIdentity {
            account: Some("123456789012".to_owned()),
            arn: None,
            user_id: Some("AIDA".to_owned()),
        };

        assert_eq!(
            identity.to_string(),
            "account=123456789012 arn=- user_id=AIDA"
        );
    }
}
