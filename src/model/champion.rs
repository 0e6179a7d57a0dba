use super::ids::ChampionId;

/// Catalog entry as returned by the champion list endpoint.
#[derive(Debug, Clone)]
pub struct Champion {
    pub id: ChampionId,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub tags: Vec<String>,
    pub ratings: Ratings,
}

/// The four 0-10 power ratings shown in the stat chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ratings {
    pub attack: u8,
    pub defense: u8,
    pub magic: u8,
    pub difficulty: u8,
}

impl Ratings {
    pub fn any_nonzero(&self) -> bool {
        self.attack > 0 || self.defense > 0 || self.magic > 0 || self.difficulty > 0
    }
}

/// Extended record fetched on demand for the detail and gallery overlays.
#[derive(Debug, Clone)]
pub struct ChampionDetail {
    pub id: ChampionId,
    pub lore: String,
    pub passive: Ability,
    pub spells: Vec<Ability>,
    pub skins: Vec<Skin>,
}

#[derive(Debug, Clone)]
pub struct Ability {
    pub name: String,
    pub description: String,
    /// Icon filename as supplied by the detail record, used in icon URLs.
    pub icon: String,
}

#[derive(Debug, Clone)]
pub struct Skin {
    pub name: String,
    /// Variant index used to build the skin's loading-art URL.
    pub num: i32,
}

impl Skin {
    /// The API marks the base skin with the sentinel name "default".
    pub fn is_base(&self) -> bool {
        self.name == "default"
    }
}

/// Fixed position labels for the four active abilities.
pub const SPELL_KEYS: [&str; 4] = ["Q", "W", "E", "R"];
