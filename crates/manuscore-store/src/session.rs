//! The current-user presence marker.
//!
//! Presence of the marker means "logged in"; any non-empty string is legal.
//! This is a placeholder check, not a security boundary — no password
//! verification occurs anywhere.

use manuscore_core::error::Error;

use crate::blob::{BlobStore, SESSION_KEY};

/// Establish the session marker.
pub fn login<S: BlobStore>(storage: &mut S, user: &str) -> Result<(), Error> {
    storage.write(SESSION_KEY, user.trim())?;
    Ok(())
}

/// Clear the session marker.
pub fn logout<S: BlobStore>(storage: &mut S) -> Result<(), Error> {
    storage.remove(SESSION_KEY)?;
    Ok(())
}

/// The current user, if a non-empty marker is present.
pub fn current_user<S: BlobStore>(storage: &S) -> Result<Option<String>, Error> {
    Ok(storage
        .read(SESSION_KEY)?
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty()))
}

/// The current user, or `SessionNotEstablished`. Callers gate every
/// mutating action on this.
pub fn require_user<S: BlobStore>(storage: &S) -> Result<String, Error> {
    current_user(storage)?.ok_or(Error::SessionNotEstablished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryBlobStore;

    #[test]
    fn login_then_current_user() {
        let mut storage = MemoryBlobStore::new();
        login(&mut storage, "  reviewer1 ").unwrap();
        assert_eq!(current_user(&storage).unwrap().as_deref(), Some("reviewer1"));
        assert_eq!(require_user(&storage).unwrap(), "reviewer1");
    }

    #[test]
    fn logout_clears_the_marker() {
        let mut storage = MemoryBlobStore::new();
        login(&mut storage, "reviewer1").unwrap();
        logout(&mut storage).unwrap();
        assert_eq!(current_user(&storage).unwrap(), None);
    }

    #[test]
    fn require_user_without_marker_fails() {
        let storage = MemoryBlobStore::new();
        let err = require_user(&storage).unwrap_err();
        assert!(matches!(err, Error::SessionNotEstablished));
    }

    #[test]
    fn blank_marker_counts_as_not_established() {
        let mut storage = MemoryBlobStore::new();
        login(&mut storage, "   ").unwrap();
        assert!(matches!(
            require_user(&storage).unwrap_err(),
            Error::SessionNotEstablished
        ));
    }
}
