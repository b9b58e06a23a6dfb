use std::path::Path;

use crate::error::IdentityError;

/// Source of WARP identities
///
/// After a successful `load_or_create_identity`, profile text is available
/// at `profile_path`.
pub trait IdentityProvider {
    /// Whether a profile is already available for this license
    fn profile_exists(&self, license_key: &str) -> bool;

    /// Make a profile available, registering against `endpoint` if needed
    fn load_or_create_identity(&self, license_key: &str, endpoint: &str)
        -> Result<(), IdentityError>;

    /// Where the profile text lives
    fn profile_path(&self) -> &Path;
}

/// Ask the provider for an identity only when no profile exists yet
pub fn ensure_profile<P: IdentityProvider + ?Sized>(
    provider: &P,
    license_key: &str,
    endpoint: &str,
) -> Result<(), IdentityError> {
    if provider.profile_exists(license_key) {
        tracing::debug!(
            "Using existing profile {}",
            provider.profile_path().display()
        );
        return Ok(());
    }

    tracing::info!("No profile found, requesting identity via {}", endpoint);
    provider.load_or_create_identity(license_key, endpoint)
}
