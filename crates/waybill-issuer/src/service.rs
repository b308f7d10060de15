use crate::error::IssuerError;
use crate::policy::RetryPolicy;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use waybill_core::{CountryCode, IssuanceRecord, IssueError, Issuer, Registry, TrackingCode};
use waybill_generator::Generator;

/// A concrete implementation of the `Issuer` trait.
///
/// This service wraps a `Registry` and a `Generator`:
/// - the generator proposes a candidate code
/// - the registry atomically accepts it or reports a collision
/// - collisions are retried up to the policy's `max_attempts`
///
/// Storage failures end the issuance immediately and never consume retries.
/// The service keeps no state between calls, so any number of callers may
/// issue concurrently against the same registry.
#[derive(Debug)]
pub struct IssuerService<R, G> {
    registry: Arc<R>,
    generator: Arc<G>,
    policy: RetryPolicy,
}

impl<R, G> Clone for IssuerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            generator: Arc::clone(&self.generator),
            policy: self.policy,
        }
    }
}

impl<R: Registry, G: Generator> IssuerService<R, G> {
    /// Creates a new `IssuerService` with the default retry policy.
    pub fn new(registry: R, generator: G) -> Self {
        Self {
            registry: Arc::new(registry),
            generator: Arc::new(generator),
            policy: RetryPolicy::default(),
        }
    }

    /// Creates a service with a custom retry policy.
    pub fn with_policy(
        registry: R,
        generator: G,
        policy: RetryPolicy,
    ) -> Result<Self, IssuerError> {
        Self::with_shared_registry(Arc::new(registry), generator, policy)
    }

    /// Creates a service over a registry that is shared with other owners.
    pub fn with_shared_registry(
        registry: Arc<R>,
        generator: G,
        policy: RetryPolicy,
    ) -> Result<Self, IssuerError> {
        policy.validate()?;

        Ok(Self {
            registry,
            generator: Arc::new(generator),
            policy,
        })
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }
}

#[async_trait]
impl<R: Registry, G: Generator> Issuer for IssuerService<R, G> {
    async fn issue(
        &self,
        origin: &CountryCode,
        destination: &CountryCode,
    ) -> Result<TrackingCode, IssueError> {
        let max_attempts = self.policy.max_attempts;
        debug!(%origin, %destination, "issuing tracking code");

        for attempt in 1..=max_attempts {
            let record = IssuanceRecord::now(self.generator.generate(origin, destination));

            match self.registry.register_if_absent(&record).await {
                Ok(true) => {
                    info!(code = %record.code, attempt, "issued tracking code");
                    return Ok(record.code);
                }
                Ok(false) => {
                    warn!(
                        code = %record.code,
                        attempt,
                        max_attempts,
                        "tracking code collision, retrying"
                    );
                }
                Err(err) => {
                    error!(code = %record.code, attempt, error = %err, "failed to register tracking code");
                    return Err(IssueError::StorageUnavailable(err));
                }
            }
        }

        error!(max_attempts, "failed to issue a unique tracking code");
        Err(IssueError::GenerationExhausted {
            attempts: max_attempts,
        })
    }
}
