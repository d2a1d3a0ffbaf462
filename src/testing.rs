use crate::player::StoredPlayer;
use crate::store::UserStore;

pub fn insta_settings(prefix: &str) -> impl Drop {
    let mut settings = insta::Settings::new();
    settings.set_snapshot_suffix(prefix);
    settings.bind_to_scope()
}

/// A store that remembers every record handed to it
#[derive(Default)]
pub struct MemoryStore {
    pub saved: Vec<StoredPlayer>,
}

impl UserStore for MemoryStore {
    fn save_user(&mut self, user: &StoredPlayer) -> anyhow::Result<()> {
        self.saved.push(user.clone());
        Ok(())
    }

    fn load_user(&self, name: &str) -> Option<StoredPlayer> {
        self.saved.iter().rev().find(|u| u.name == name).cloned()
    }
}

/// A store whose saves always fail
pub struct FailStore;

impl UserStore for FailStore {
    fn save_user(&mut self, _: &StoredPlayer) -> anyhow::Result<()> {
        anyhow::bail!("the store is closed")
    }

    fn load_user(&self, _: &str) -> Option<StoredPlayer> {
        None
    }
}
