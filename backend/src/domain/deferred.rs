//! Deferred resolution of catalogue reads.
//!
//! Every catalogue read is issued as its own Tokio task and observed later
//! through a single `Result`. The task waits a fixed interval before it
//! touches the store, so call sites already follow the contract a remote
//! store would impose: a read resolves exactly once, independently of any
//! other read, with either a value or a typed failure. Retries are left to
//! the caller.

use std::future::Future;
use std::time::Duration;

use tracing::error;

use super::{Error, TraceId};

/// Interval every production read waits before resolving.
pub const READ_DEFERRAL: Duration = Duration::from_millis(100);

/// Wrapper that resolves reads on a spawned task after a fixed interval.
///
/// # Examples
/// ```
/// use bookshelf::domain::ReadDeferral;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let value = ReadDeferral::immediate()
///     .resolve(async { Ok::<_, bookshelf::domain::Error>(7) })
///     .await
///     .expect("read resolves");
/// assert_eq!(value, 7);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadDeferral {
    delay: Duration,
}

impl Default for ReadDeferral {
    fn default() -> Self {
        Self::fixed()
    }
}

impl ReadDeferral {
    /// Production deferral using [`READ_DEFERRAL`].
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            delay: READ_DEFERRAL,
        }
    }

    /// Zero-interval deferral; reads still run on their own task.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    #[cfg(test)]
    pub(crate) const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Interval waited before each read.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `read` on a spawned task after the configured interval.
    ///
    /// A task that panics or is cancelled resolves as an internal error so
    /// callers never wait on a read that cannot complete.
    pub async fn resolve<T, Fut>(&self, read: Fut) -> Result<T, Error>
    where
        T: Send + 'static,
        Fut: Future<Output = Result<T, Error>> + Send + 'static,
    {
        let delay = self.delay;
        let task = tokio::spawn(TraceId::propagate(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            read.await
        }));

        match task.await {
            Ok(result) => result,
            Err(join_error) => {
                error!(error = %join_error, "deferred read did not complete");
                Err(Error::internal("deferred read did not complete"))
            }
        }
    }
}
