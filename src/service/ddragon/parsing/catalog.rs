use json::{object::Object, JsonValue};

use crate::model::champion::{Champion, Ratings};

use super::ParsingError;

/// Parses the champion list document. The `data` member is an object keyed by
/// champion id; its insertion order is kept, so the catalog order equals the
/// document order.
pub fn parse_catalog(json: &JsonValue) -> Result<Vec<Champion>, ParsingError> {
    if let JsonValue::Object(root) = json {
        let data = root
            .get("data")
            .ok_or(ParsingError::InvalidType("data".into()))?;

        if let JsonValue::Object(map) = data {
            let mut champions = Vec::new();
            for (_, entry) in map.iter() {
                if let JsonValue::Object(champ_obj) = entry {
                    champions.push(parse_champ_obj(champ_obj)?);
                } else {
                    return Err(ParsingError::InvalidType("champion entry".into()));
                }
            }
            return Ok(champions);
        }
        return Err(ParsingError::InvalidType("data".into()));
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_champ_obj(obj: &Object) -> Result<Champion, ParsingError> {
    let id = obj["id"].as_str().ok_or(ParsingError::InvalidType("id".into()))?;
    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    let title = obj["title"].as_str().ok_or(ParsingError::InvalidType("title".into()))?;
    let blurb = obj["blurb"].as_str().ok_or(ParsingError::InvalidType("blurb".into()))?;

    let mut tags = Vec::new();
    if let JsonValue::Array(tag_array) = &obj["tags"] {
        for tag_entry in tag_array {
            let tag = tag_entry
                .as_str()
                .ok_or(ParsingError::InvalidType("tag entry".into()))?;
            tags.push(tag.to_string());
        }
    } else {
        return Err(ParsingError::InvalidType("tags".into()));
    }

    let ratings = parse_ratings(&obj["info"])?;

    Ok(Champion {
        id: id.into(),
        name: name.to_string(),
        title: title.to_string(),
        blurb: blurb.to_string(),
        tags,
        ratings,
    })
}

fn parse_ratings(json: &JsonValue) -> Result<Ratings, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let attack = obj["attack"]
            .as_u8()
            .ok_or(ParsingError::InvalidType("info/attack".into()))?;
        let defense = obj["defense"]
            .as_u8()
            .ok_or(ParsingError::InvalidType("info/defense".into()))?;
        let magic = obj["magic"]
            .as_u8()
            .ok_or(ParsingError::InvalidType("info/magic".into()))?;
        let difficulty = obj["difficulty"]
            .as_u8()
            .ok_or(ParsingError::InvalidType("info/difficulty".into()))?;

        return Ok(Ratings {
            attack,
            defense,
            magic,
            difficulty,
        });
    }

    Err(ParsingError::InvalidType("info".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_DOC: &str = r#"{
        "type": "champion",
        "version": "14.1.1",
        "data": {
            "Aatrox": {
                "id": "Aatrox",
                "name": "Aatrox",
                "title": "the Darkin Blade",
                "blurb": "Once honored defenders of Shurima...",
                "tags": ["Fighter", "Tank"],
                "info": {"attack": 8, "defense": 4, "magic": 3, "difficulty": 4}
            },
            "Ahri": {
                "id": "Ahri",
                "name": "Ahri",
                "title": "the Nine-Tailed Fox",
                "blurb": "Innately connected to the magic of the spirit realm...",
                "tags": ["Mage", "Assassin"],
                "info": {"attack": 3, "defense": 4, "magic": 8, "difficulty": 5}
            }
        }
    }"#;

    #[test]
    fn catalog_preserves_document_order() {
        let doc = json::parse(CATALOG_DOC).unwrap();
        let champions = parse_catalog(&doc).unwrap();
        assert_eq!(champions.len(), 2);
        assert_eq!(champions[0].name, "Aatrox");
        assert_eq!(champions[1].name, "Ahri");
    }

    #[test]
    fn champion_fields_are_parsed() {
        let doc = json::parse(CATALOG_DOC).unwrap();
        let champions = parse_catalog(&doc).unwrap();
        let ahri = &champions[1];
        assert_eq!(ahri.id.to_string(), "Ahri");
        assert_eq!(ahri.title, "the Nine-Tailed Fox");
        assert_eq!(ahri.tags, vec!["Mage", "Assassin"]);
        assert_eq!(ahri.ratings.magic, 8);
        assert!(ahri.ratings.any_nonzero());
    }

    #[test]
    fn missing_field_is_an_error() {
        let doc = json::parse(
            r#"{"data": {"Aatrox": {"id": "Aatrox", "name": "Aatrox", "title": "t", "blurb": "b",
                "info": {"attack": 1, "defense": 1, "magic": 1, "difficulty": 1}}}}"#,
        )
        .unwrap();
        assert!(matches!(
            parse_catalog(&doc),
            Err(ParsingError::InvalidType(field)) if field == "tags"
        ));
    }

    #[test]
    fn missing_data_member_is_an_error() {
        let doc = json::parse(r#"{"type": "champion"}"#).unwrap();
        assert!(matches!(
            parse_catalog(&doc),
            Err(ParsingError::InvalidType(_))
        ));
    }
}
