use std::fmt::Display;

/// Stable champion identifier (e.g. "Aatrox"). Used as the join key for
/// detail requests and every image URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChampionId(pub String);

impl Display for ChampionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ChampionId {
    fn from(value: String) -> Self {
        ChampionId(value)
    }
}

impl From<&str> for ChampionId {
    fn from(value: &str) -> Self {
        ChampionId(value.to_string())
    }
}
