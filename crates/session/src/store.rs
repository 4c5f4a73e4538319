// crates/session/src/store.rs
//! Typed session store over a storage backend

use crate::error::SessionResult;
use crate::storage::{SessionRecord, SessionStorage};
use readstack_core::User;

/// The locally persisted record of the currently authenticated user
///
/// Reads are lenient: an unreadable or corrupt backend is reported as
/// "logged out" (with a warning) rather than an error, matching the
/// defaults the UI expects. Writes propagate their errors.
///
/// Invariant: the logged-in flag is true if and only if a non-zero user id
/// was stored. A user id of 0 is the "unauthenticated" sentinel throughout
/// the mediation and UI layers.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    /// Creates a store over the given backend
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Returns true if a user is logged in; defaults to false
    pub fn is_logged_in(&self) -> bool {
        self.record().is_logged_in
    }

    /// Reconstructs the current user from the stored fields
    ///
    /// The session holds only a projection (id, name, email): the rebuilt
    /// user has an empty phone and mirrors the stored name as username.
    /// Returns `None` when logged out or when the stored id is 0.
    pub fn current_user(&self) -> Option<User> {
        let record = self.record();
        if !record.is_logged_in || record.user_id == 0 {
            return None;
        }

        Some(User {
            id: record.user_id,
            username: record.user_name.clone(),
            name: record.user_name,
            email: record.user_email,
            phone: String::new(),
            currently_reading: Vec::new(),
        })
    }

    /// Stores the authenticated user, or clears the session for `None`
    pub fn set_current_user(&self, user: Option<&User>) -> SessionResult<()> {
        let record = match user {
            Some(user) => SessionRecord {
                user_id: user.id,
                user_name: user.name.clone(),
                user_email: user.email.clone(),
                is_logged_in: user.id != 0,
            },
            None => SessionRecord::default(),
        };
        self.storage.save(&record)
    }

    /// Returns the stored user id; 0 means unauthenticated
    pub fn current_user_id(&self) -> i64 {
        self.record().user_id
    }

    /// Clears everything
    pub fn logout(&self) -> SessionResult<()> {
        self.storage.clear()
    }

    fn record(&self) -> SessionRecord {
        match self.storage.load() {
            Ok(record) => record,
            Err(e) => {
                log::warn!("session store unreadable, treating as logged out: {}", e);
                SessionRecord::default()
            }
        }
    }
}
