use ratatui::{style::Color, text::Line};

use crate::{
    model::champion::Skin,
    service::{ddragon::urls, dictionary::TagDictionary},
    styled_line, styled_span,
    ui::overlay::GalleryOverlay,
};

const GOLD: Color = Color::Rgb(200, 155, 60);

/// Builds the skin gallery's text content. Unlike the detail overlay there is
/// no fallback on a failed fetch; an inline error is all that remains.
pub fn gallery_lines(overlay: &GalleryOverlay, dictionary: &TagDictionary) -> Vec<Line<'static>> {
    let champ = &overlay.champion;

    let mut lines = vec![
        styled_line!("Skins - {}", champ.name; Bold GOLD),
        // The splash art doubles as the gallery backdrop.
        styled_line!(urls::splash_art_url(&champ.id); Color::DarkGray),
        styled_line!(),
    ];

    if overlay.data.is_loading() {
        lines.push(styled_line!("Loading skins..."; Color::DarkGray));
        return lines;
    }

    if let Some(detail) = overlay.data.get_data() {
        for skin in &detail.skins {
            lines.push(styled_line!(LIST [
                styled_span!("• "; GOLD),
                styled_span!(skin_label(skin, dictionary); Color::White),
            ]));
            lines.push(styled_line!("  {}", urls::loading_art_url(&champ.id, skin.num); Color::DarkGray));
        }
        return lines;
    }

    lines.push(styled_line!("Could not load skins."; Color::Red));
    lines
}

fn skin_label(skin: &Skin, dictionary: &TagDictionary) -> String {
    if skin.is_base() {
        dictionary.default_skin_label().to_string()
    } else {
        skin.name.clone()
    }
}
