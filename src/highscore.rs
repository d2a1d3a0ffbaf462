#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    pub name: String,
    pub score: u64,
}

impl HighScore {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Lookups over a leaderboard. The list is expected to already be in
/// descending score order, maintained by whoever built it.
pub trait HighScores {
    fn find_by_name(&self, name: &str) -> Option<&HighScore>;
    fn top(&self) -> Option<&HighScore>;
}

impl HighScores for [HighScore] {
    fn find_by_name(&self, name: &str) -> Option<&HighScore> {
        let name = name.to_lowercase();
        self.iter().find(|h| h.name.to_lowercase() == name)
    }

    fn top(&self) -> Option<&HighScore> {
        self.first()
    }
}
