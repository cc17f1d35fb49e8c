//! License gate
//!
//! Authorization is decided by the host; the route only asks the gate before
//! touching the rules client.

use crate::error::{AlertError, Result};

/// License/authorization state supplied by the host.
pub trait LicenseState: Send + Sync {
    /// Verify that API access is allowed for the current license.
    fn verify_api_access(&self) -> Result<()>;
}

/// Gate that allows every request. Default for the standalone binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnrestrictedLicense;

impl LicenseState for UnrestrictedLicense {
    fn verify_api_access(&self) -> Result<()> {
        Ok(())
    }
}

/// Gate with a fixed decision, useful for wiring denial paths in tests.
#[derive(Debug, Clone)]
pub struct StaticLicense {
    allowed: bool,
    reason: String,
}

impl StaticLicense {
    pub fn denied(reason: &str) -> Self {
        Self {
            allowed: false,
            reason: reason.to_string(),
        }
    }
}

impl LicenseState for StaticLicense {
    fn verify_api_access(&self) -> Result<()> {
        if self.allowed {
            Ok(())
        } else {
            Err(AlertError::Forbidden(self.reason.clone()))
        }
    }
}
