use std::collections::HashMap;

/// Locale-aware display labels for the closed tag vocabulary. Lookups are
/// total: a tag without an entry comes back verbatim, so an unexpected tag
/// never breaks filtering or rendering.
pub struct TagDictionary {
    labels: HashMap<&'static str, &'static str>,
    default_skin: &'static str,
}

impl TagDictionary {
    pub fn for_locale(locale: &str) -> Self {
        match locale {
            "pt_BR" => Self {
                labels: HashMap::from([
                    ("All", "Todos"),
                    ("Assassin", "Assassino"),
                    ("Fighter", "Lutador"),
                    ("Mage", "Mago"),
                    ("Marksman", "Atirador"),
                    ("Support", "Suporte"),
                    ("Tank", "Tanque"),
                ]),
                default_skin: "Padrão",
            },
            _ => Self {
                labels: HashMap::new(),
                default_skin: "Default",
            },
        }
    }

    pub fn label<'a>(&self, tag: &'a str) -> &'a str {
        self.labels.get(tag).copied().unwrap_or(tag)
    }

    /// Display name for the sentinel "default" skin.
    pub fn default_skin_label(&self) -> &'static str {
        self.default_skin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_are_translated() {
        let dictionary = TagDictionary::for_locale("pt_BR");
        assert_eq!(dictionary.label("Mage"), "Mago");
        assert_eq!(dictionary.label("Marksman"), "Atirador");
    }

    #[test]
    fn unknown_tags_fall_back_verbatim() {
        let dictionary = TagDictionary::for_locale("pt_BR");
        assert_eq!(dictionary.label("Void"), "Void");
    }

    #[test]
    fn unknown_locale_is_identity() {
        let dictionary = TagDictionary::for_locale("en_US");
        assert_eq!(dictionary.label("Mage"), "Mage");
        assert_eq!(dictionary.default_skin_label(), "Default");
    }

    #[test]
    fn default_skin_label_is_localized() {
        let dictionary = TagDictionary::for_locale("pt_BR");
        assert_eq!(dictionary.default_skin_label(), "Padrão");
    }
}
