use json::JsonValue;

use super::ParsingError;

/// The versions endpoint returns an ordered list of patch strings. Element 0
/// is assumed to be the newest patch; the endpoint does not document this as
/// a contract, so callers should treat it as a default, not a guarantee.
pub fn parse_versions(json: &JsonValue) -> Result<Vec<String>, ParsingError> {
    if let JsonValue::Array(array) = json {
        let mut versions = Vec::new();
        for entry in array {
            let version = entry
                .as_str()
                .ok_or(ParsingError::InvalidType("version entry".into()))?;
            versions.push(version.to_string());
        }

        if versions.is_empty() {
            return Err(ParsingError::EmptyVersionList);
        }
        return Ok(versions);
    }

    Err(ParsingError::InvalidType("root".into()))
}
