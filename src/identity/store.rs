use std::path::{Path, PathBuf};

use crate::error::IdentityError;

use super::traits::IdentityProvider;

/// Identity provider backed by a profile file on disk
///
/// It never registers new identities: a missing file is reported as
/// [`IdentityError::NotFound`].
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl IdentityProvider for ProfileStore {
    fn profile_exists(&self, _license_key: &str) -> bool {
        self.path.is_file()
    }

    fn load_or_create_identity(
        &self,
        _license_key: &str,
        endpoint: &str,
    ) -> Result<(), IdentityError> {
        match std::fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(IdentityError::NotFound(self.path.clone())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Registration via {} is not supported; create {} first",
                    endpoint,
                    self.path.display()
                );
                Err(IdentityError::NotFound(self.path.clone()))
            }
            Err(e) => Err(IdentityError::Io(e)),
        }
    }

    fn profile_path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ensure_profile;

    #[test]
    fn test_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let store = ProfileStore::new(file.path());
        assert!(store.profile_exists(""));
        assert!(ensure_profile(&store, "", "engage.cloudflareclient.com:2408").is_ok());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wgcf-profile.ini");
        let store = ProfileStore::new(&path);

        assert!(!store.profile_exists(""));
        let err = ensure_profile(&store, "", "engage.cloudflareclient.com:2408").unwrap_err();
        assert!(matches!(err, IdentityError::NotFound(p) if p == path));
    }

    #[test]
    fn test_directory_is_not_a_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        assert!(!store.profile_exists(""));
        assert!(store.load_or_create_identity("", "x:1").is_err());
    }
}
