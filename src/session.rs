use chrono::Utc;

use crate::error::StorageError;
use crate::models::SessionRecord;
use crate::store::Store;

pub const SESSION_KEY: &str = "admin_session";

/// Dashboard password. A hard-coded gate, not authentication: anyone with
/// access to the store can bypass it. It only keeps casual visitors out of
/// the editing screens.
pub const ADMIN_PASSWORD: &str = "rose123";

pub struct AdminSession<'a> {
    store: &'a Store,
    logged_in: bool,
}

impl<'a> AdminSession<'a> {
    pub fn new(store: &'a Store) -> Self {
        AdminSession {
            store,
            logged_in: false,
        }
    }

    /// Check the password. With `remember` the login is persisted so later
    /// contexts skip the gate; otherwise it lasts only as long as this
    /// session value does.
    pub fn login(&mut self, password: &str, remember: bool) -> Result<bool, StorageError> {
        if password.trim() != ADMIN_PASSWORD {
            return Ok(false);
        }

        self.logged_in = true;

        if remember {
            let now = Utc::now();
            let record = SessionRecord {
                logged_in: true,
                last_login: now,
                last_activity: now,
            };
            self.store.put(SESSION_KEY, &record)?;
        }

        Ok(true)
    }

    pub fn is_logged_in(&self) -> bool {
        if self.logged_in {
            return true;
        }

        self.store
            .get::<SessionRecord>(SESSION_KEY)
            .map(|record| record.logged_in)
            .unwrap_or(false)
    }

    /// Stamp activity on a remembered login. No-op when nothing is persisted.
    pub fn touch(&self) -> Result<(), StorageError> {
        if let Some(mut record) = self.store.get::<SessionRecord>(SESSION_KEY) {
            record.last_activity = Utc::now();
            self.store.put(SESSION_KEY, &record)?;
        }

        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.logged_in = false;
        self.store.remove(SESSION_KEY)
    }
}
