use crate::model::ids::ChampionId;

pub const VERSIONS_URL: &str = "https://ddragon.leagueoflegends.com/api/versions.json";
const CDN_BASE: &str = "https://ddragon.leagueoflegends.com/cdn";

pub fn catalog_url(version: &str, locale: &str) -> String {
    format!("{}/{}/data/{}/champion.json", CDN_BASE, version, locale)
}

pub fn champion_url(version: &str, locale: &str, id: &ChampionId) -> String {
    format!("{}/{}/data/{}/champion/{}.json", CDN_BASE, version, locale, id)
}

/// Loading-screen art for a skin variant. Variant 0 is the base look used on
/// the catalog cards.
pub fn loading_art_url(id: &ChampionId, num: i32) -> String {
    format!("{}/img/champion/loading/{}_{}.jpg", CDN_BASE, id, num)
}

pub fn splash_art_url(id: &ChampionId) -> String {
    format!("{}/img/champion/splash/{}_0.jpg", CDN_BASE, id)
}

pub fn passive_icon_url(version: &str, file: &str) -> String {
    format!("{}/{}/img/passive/{}", CDN_BASE, version, file)
}

pub fn spell_icon_url(version: &str, file: &str) -> String {
    format!("{}/{}/img/spell/{}", CDN_BASE, version, file)
}
