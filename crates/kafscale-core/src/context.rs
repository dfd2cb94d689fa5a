//! The cancellation-capable context every [`crate::MetadataAuthority`] operation
//! takes as its first argument.

use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

/// A thin wrapper around a [`CancellationToken`] passed to every authority
/// operation. Operations check cancellation once, at entry, and never again;
/// they are short, CPU-bound, and run to completion once started.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancel: Option<CancellationToken>,
}

impl Context {
    /// A context that can never be cancelled.
    pub fn background() -> Self {
        Context { cancel: None }
    }

    /// Wraps a real cancellation token, typically one owned by the caller's
    /// request lifecycle.
    pub fn from_token(cancel: CancellationToken) -> Self {
        Context {
            cancel: Some(cancel),
        }
    }

    /// Returns `Err(Error::Cancelled)` if this context's token is already
    /// cancelled, `Ok(())` otherwise.
    pub(crate) fn check(&self) -> Result<()> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_never_cancelled() {
        assert!(Context::background().check().is_ok());
    }

    #[test]
    fn cancelled_token_short_circuits() {
        let token = CancellationToken::new();
        token.cancel();
        let ctx = Context::from_token(token);
        assert_eq!(ctx.check(), Err(Error::Cancelled));
    }
}
