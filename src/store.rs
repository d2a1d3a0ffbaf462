use std::collections::HashMap;
use std::path::PathBuf;

use crate::persist::{Json, PersistExt};
use crate::player::StoredPlayer;

/// The persistence collaborator stats are saved through. Failure
/// handling past the returned error is the implementation's problem.
pub trait UserStore {
    fn save_user(&mut self, user: &StoredPlayer) -> anyhow::Result<()>;
    fn load_user(&self, name: &str) -> Option<StoredPlayer>;
}

type Users = HashMap<String, StoredPlayer>;

/// Name-keyed stored records, flushed to a single json file on every save
pub struct JsonStore {
    path: PathBuf,
    users: Users,
}

impl JsonStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let users = Users::load_from_file::<Json>(&path).unwrap_or_default();
        log::debug!("read {} users from {}", users.len(), path.display());
        Self { path, users }
    }

    pub fn users(&self) -> impl Iterator<Item = &StoredPlayer> {
        self.users.values()
    }

    fn flush(&self) -> anyhow::Result<()> {
        log::debug!(
            "writing {} users to {}",
            self.users.len(),
            self.path.display()
        );
        self.users.save_to_file::<Json>(&self.path)
    }
}

impl UserStore for JsonStore {
    fn save_user(&mut self, user: &StoredPlayer) -> anyhow::Result<()> {
        self.users.insert(user.name.clone(), user.clone());
        self.flush()
    }

    fn load_user(&self, name: &str) -> Option<StoredPlayer> {
        self.users.get(name).cloned()
    }
}
