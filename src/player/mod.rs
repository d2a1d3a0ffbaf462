use crate::clock;
use crate::format::FormatTime as _;
use crate::store::UserStore;

/// The in-memory record for a connected player. `storage` is attached
/// by the persistence layer once its durable counterpart is known, and
/// is the record everything reconciles against.
#[derive(Default, Debug, Clone)]
pub struct Session {
    pub name: String,
    pub time_played: u64,
    pub first_login: String,
    pub last_seen: String,
    pub login_count: u64,
    pub known_accounts: Vec<String>,
    pub known_ips: Vec<String>,
    pub kills: u64,
    pub deaths: u64,
    pub mobkills: u64,
    pub bosskills: u64,
    pub storage: Option<StoredPlayer>,
}

/// The durable per-player statistics record, as the store writes it.
#[derive(serde::Serialize, serde::Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct StoredPlayer {
    pub name: String,
    pub total_time: u64,
    pub first_login: String,
    pub last_seen: String,
    pub login_count: u64,
    pub known_accounts: Vec<String>,
    pub known_ips: Vec<String>,
    pub kills: u64,
    pub deaths: u64,
    pub mobkills: u64,
    pub bosskills: u64,
}

impl Session {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Copies this session's stats into its stored record and hands the
    /// record to the store. Does nothing when no record is attached.
    pub fn save_stats(&mut self, store: &mut dyn UserStore) -> anyhow::Result<()> {
        let storage = match &mut self.storage {
            Some(storage) => storage,
            None => return Ok(()),
        };

        storage.total_time = self.time_played;
        storage.first_login = self.first_login.clone();
        storage.last_seen = clock::now_local();
        storage.login_count = self.login_count;
        storage.known_accounts = self.known_accounts.clone();
        storage.known_ips = self.known_ips.clone();

        storage.kills = self.kills;
        storage.deaths = self.deaths;
        storage.mobkills = self.mobkills;
        storage.bosskills = self.bosskills;

        log::trace!("saving stats for {}", self.name);
        store.save_user(storage)
    }

    /// Used on login. Copies the stored record's stats into this session
    /// and counts the login. Call once per login event, a second call
    /// increments the login count again.
    pub fn sync_stats(&mut self) {
        let storage = match &self.storage {
            Some(storage) => storage.clone(),
            None => return,
        };

        self.time_played = storage.total_time;
        self.first_login = storage.first_login;
        self.last_seen = clock::now_utc();
        self.login_count = storage.login_count + 1;
        self.known_accounts = storage.known_accounts;
        self.known_ips = storage.known_ips;

        self.kills = storage.kills;
        self.deaths = storage.deaths;
        self.mobkills = storage.mobkills;
        self.bosskills = storage.bosskills;
    }

    /// The time this session has collected, as readable english
    pub fn time_played(&self) -> String {
        std::time::Duration::from_secs(self.time_played).as_readable_time()
    }
}

impl StoredPlayer {
    /// The time this record has collected, as readable english
    pub fn time_played(&self) -> String {
        std::time::Duration::from_secs(self.total_time).as_readable_time()
    }
}
