use async_trait::async_trait;
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use tutorials_core::{CallerIdentity, IdentityProbe};

/// Answers with a fixed identity, or fails every call when built with
/// [`MemoryIdentityProbe::failing`]. Counts calls either way.
#[derive(Debug, Default)]
pub struct MemoryIdentityProbe {
    identity: Option<CallerIdentity>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MemoryIdentityProbe {
    pub fn new(identity: CallerIdentity) -> Self {
        Self {
            identity: Some(identity),
            ..Self::default()
        }
    }

    /// Identity reported when running without cloud credentials.
    pub fn local() -> Self {
        Self::new(CallerIdentity {
            arn: Some("local".to_owned()),
            ..CallerIdentity::default()
        })
    }

    pub fn failing() -> Self {
        Self::default()
    }

    /// Fails every call, each only after waiting out `delay`.
    pub fn failing_after(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProbe for MemoryIdentityProbe {
    async fn caller_identity(&self) -> anyhow::Result<CallerIdentity> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.identity {
            Some(identity) => Ok(identity.clone()),
            None => Err(anyhow::anyhow!("no caller identity available")),
        }
    }
}

#[cfg(test)]
mod tests {
    use tutorials_core::test::get_caller_identity_fixture;

    use super::*;

    #[tokio::test]
    async fn test_caller_identity() {
        let probe = MemoryIdentityProbe::new(get_caller_identity_fixture());

        let identity = probe.caller_identity().await.unwrap();
        assert_eq!(identity, get_caller_identity_fixture());
        assert_eq!(probe.calls(), 1);

        let failing_probe = MemoryIdentityProbe::failing();
        assert!(failing_probe.caller_identity().await.is_err());
        assert_eq!(failing_probe.calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_after_delay() {
        let probe = MemoryIdentityProbe::failing_after(Duration::from_millis(20));

        let started = std::time::Instant::now();
        assert!(probe.caller_identity().await.is_err());

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(probe.calls(), 1);
    }
}
