use json::{object::Object, JsonValue};

use crate::model::{
    champion::{Ability, ChampionDetail, Skin},
    ids::ChampionId,
};

use super::ParsingError;

/// Parses the per-champion detail document. The payload lives under
/// `data.<id>`, mirroring the list endpoint's shape.
pub fn parse_detail(json: &JsonValue, id: &ChampionId) -> Result<ChampionDetail, ParsingError> {
    let entry = &json["data"][id.0.as_str()];
    if let JsonValue::Object(obj) = entry {
        let lore = obj["lore"]
            .as_str()
            .ok_or(ParsingError::InvalidType("lore".into()))?;

        let passive = if let JsonValue::Object(passive_obj) = &obj["passive"] {
            parse_ability_obj(passive_obj, "passive")?
        } else {
            return Err(ParsingError::InvalidType("passive".into()));
        };

        let mut spells = Vec::new();
        if let JsonValue::Array(spell_array) = &obj["spells"] {
            for spell_entry in spell_array {
                if let JsonValue::Object(spell_obj) = spell_entry {
                    spells.push(parse_ability_obj(spell_obj, "spell")?);
                } else {
                    return Err(ParsingError::InvalidType("spell entry".into()));
                }
            }
        } else {
            return Err(ParsingError::InvalidType("spells".into()));
        }

        let mut skins = Vec::new();
        if let JsonValue::Array(skin_array) = &obj["skins"] {
            for skin_entry in skin_array {
                if let JsonValue::Object(skin_obj) = skin_entry {
                    skins.push(parse_skin_obj(skin_obj)?);
                } else {
                    return Err(ParsingError::InvalidType("skin entry".into()));
                }
            }
        } else {
            return Err(ParsingError::InvalidType("skins".into()));
        }

        return Ok(ChampionDetail {
            id: id.clone(),
            lore: lore.to_string(),
            passive,
            spells,
            skins,
        });
    }

    Err(ParsingError::InvalidType("data entry".into()))
}

fn parse_ability_obj(obj: &Object, context: &str) -> Result<Ability, ParsingError> {
    let name = obj["name"]
        .as_str()
        .ok_or_else(|| ParsingError::InvalidType(format!("{}/name", context)))?;
    let description = obj["description"]
        .as_str()
        .ok_or_else(|| ParsingError::InvalidType(format!("{}/description", context)))?;
    let icon = obj["image"]["full"]
        .as_str()
        .ok_or_else(|| ParsingError::InvalidType(format!("{}/image/full", context)))?;

    Ok(Ability {
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
}

fn parse_skin_obj(obj: &Object) -> Result<Skin, ParsingError> {
    let name = obj["name"]
        .as_str()
        .ok_or(ParsingError::InvalidType("skin/name".into()))?;
    let num = obj["num"]
        .as_i32()
        .ok_or(ParsingError::InvalidType("skin/num".into()))?;

    Ok(Skin {
        name: name.to_string(),
        num,
    })
}
