use ratatui::{style::Color, text::Line};

use crate::{
    model::{champion::Champion, ids::ChampionId},
    service::{ddragon::urls, dictionary::TagDictionary},
    styled_line, styled_span,
};

/// Every card renders to exactly this many lines, so selection scrolling can
/// be computed without measuring.
pub const CARD_HEIGHT: u16 = 6;

const GOLD: Color = Color::Rgb(200, 155, 60);

/// Presentation-ready projection of one catalog entry. Pure data; building it
/// never touches the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    pub id: ChampionId,
    pub image_url: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub tag_labels: Vec<String>,
}

impl CardViewModel {
    pub fn build(champion: &Champion, dictionary: &TagDictionary) -> Self {
        Self {
            id: champion.id.clone(),
            // Cards always show the base look (variant 0).
            image_url: urls::loading_art_url(&champion.id, 0),
            name: champion.name.clone(),
            title: champion.title.clone(),
            blurb: champion.blurb.clone(),
            tag_labels: champion
                .tags
                .iter()
                .map(|tag| dictionary.label(tag).to_string())
                .collect(),
        }
    }
}

/// Full-replace render of the card list; the previous content is not patched.
pub fn card_lines(cards: &[CardViewModel], selected: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(cards.len() * CARD_HEIGHT as usize);

    for (index, card) in cards.iter().enumerate() {
        let marker = if index == selected { "► " } else { "  " };
        lines.push(styled_line!(LIST [
            styled_span!(marker; GOLD),
            styled_span!(&card.name; Bold GOLD),
        ]));
        lines.push(styled_line!("    {}", card.title; Color::Gray));
        lines.push(styled_line!("    {}", card.blurb));
        lines.push(styled_line!("    [{}]", card.tag_labels.join(" · "); Color::Cyan));
        lines.push(styled_line!("    {}", card.image_url; Color::DarkGray));
        lines.push(styled_line!("────"; Color::DarkGray));
    }

    lines
}

/// Why a filtered list came back empty; the placeholder wording differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    TextSearch,
    TagFilter,
}

/// An empty result never renders nothing: exactly one informational
/// placeholder block takes the grid's place.
pub fn empty_placeholder(reason: EmptyReason) -> Vec<Line<'static>> {
    match reason {
        EmptyReason::TextSearch => vec![
            styled_line!(),
            styled_line!("  Oops! No champion found."; Bold Color::White),
            styled_line!("  Check the spelling or try another class."; Color::DarkGray),
        ],
        EmptyReason::TagFilter => vec![
            styled_line!(),
            styled_line!("  No champion found in this category."; Bold Color::White),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::champion::Ratings;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample_champion() -> Champion {
        Champion {
            id: "Ahri".into(),
            name: "Ahri".to_string(),
            title: "the Nine-Tailed Fox".to_string(),
            blurb: "Innately connected to the spirit realm...".to_string(),
            tags: vec!["Mage".to_string(), "Assassin".to_string()],
            ratings: Ratings::default(),
        }
    }

    #[test]
    fn view_model_uses_translated_labels_and_base_art() {
        let dictionary = TagDictionary::for_locale("pt_BR");
        let card = CardViewModel::build(&sample_champion(), &dictionary);
        assert_eq!(card.tag_labels, vec!["Mago", "Assassino"]);
        assert!(card.image_url.ends_with("/champion/loading/Ahri_0.jpg"));
    }

    #[test]
    fn view_model_keeps_untranslated_tags_verbatim() {
        let dictionary = TagDictionary::for_locale("pt_BR");
        let mut champ = sample_champion();
        champ.tags.push("Void".to_string());
        let card = CardViewModel::build(&champ, &dictionary);
        assert_eq!(card.tag_labels.last().unwrap(), "Void");
    }

    #[test]
    fn each_card_renders_a_fixed_number_of_lines() {
        let dictionary = TagDictionary::for_locale("pt_BR");
        let cards = vec![
            CardViewModel::build(&sample_champion(), &dictionary),
            CardViewModel::build(&sample_champion(), &dictionary),
        ];
        let lines = card_lines(&cards, 0);
        assert_eq!(lines.len(), 2 * CARD_HEIGHT as usize);
    }

    #[test]
    fn selected_card_is_marked() {
        let dictionary = TagDictionary::for_locale("pt_BR");
        let cards = vec![
            CardViewModel::build(&sample_champion(), &dictionary),
            CardViewModel::build(&sample_champion(), &dictionary),
        ];
        let lines = card_lines(&cards, 1);
        assert!(!line_text(&lines[0]).contains('►'));
        assert!(line_text(&lines[CARD_HEIGHT as usize]).contains('►'));
    }

    #[test]
    fn empty_result_renders_one_placeholder_block() {
        let search = empty_placeholder(EmptyReason::TextSearch);
        assert!(!search.is_empty());
        let text: String = search.iter().map(line_text).collect::<Vec<_>>().join("\n");
        assert!(text.contains("No champion found"));

        let tag = empty_placeholder(EmptyReason::TagFilter);
        assert!(!tag.is_empty());
        let text: String = tag.iter().map(line_text).collect::<Vec<_>>().join("\n");
        assert!(text.contains("category"));
    }
}
