use std::{fmt, time::Duration};

use json::JsonValue;
use reqwest::blocking::Client;

use crate::model::{
    champion::{Champion, ChampionDetail},
    ids::ChampionId,
};

use super::{
    parsing::{catalog, detail, versions, ParsingError},
    urls,
};

/// Thin wrapper over the Data Dragon static-data endpoints. One request per
/// call; no retries and no response caching.
#[derive(Clone)]
pub struct DdragonClient {
    client: Client,
}

impl DdragonClient {
    pub fn new() -> Result<Self, ClientInitError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client })
    }

    pub fn fetch_versions(&self) -> Result<Vec<String>, RequestError> {
        let json = self.get_json(urls::VERSIONS_URL)?;
        Ok(versions::parse_versions(&json)?)
    }

    pub fn fetch_catalog(&self, version: &str, locale: &str) -> Result<Vec<Champion>, RequestError> {
        let json = self.get_json(&urls::catalog_url(version, locale))?;
        Ok(catalog::parse_catalog(&json)?)
    }

    pub fn fetch_champion(
        &self,
        version: &str,
        locale: &str,
        id: &ChampionId,
    ) -> Result<ChampionDetail, RequestError> {
        let json = self.get_json(&urls::champion_url(version, locale, id))?;
        Ok(detail::parse_detail(&json, id)?)
    }

    fn get_json(&self, url: &str) -> Result<JsonValue, RequestError> {
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(RequestError::InvalidResponse(
                response.status().as_u16(),
                url.to_string(),
            ));
        }

        let text = response.text()?;
        Ok(json::parse(&text)?)
    }
}

#[derive(Debug)]
pub enum ClientInitError {
    HttpClientCreation(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::HttpClientCreation(err) => {
                write!(f, "Failed to create HTTP client: {}", err)
            }
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpClientCreation(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    NetworkError(reqwest::Error),
    InvalidResponse(u16, String),
    JsonParseError(json::Error),
    MalformedDocument(ParsingError),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::NetworkError(err) => write!(f, "Network error: {}", err),
            RequestError::InvalidResponse(status, url) => {
                write!(f, "Server returned status {} for {}", status, url)
            }
            RequestError::JsonParseError(err) => {
                write!(f, "Failed to parse JSON response: {}", err)
            }
            RequestError::MalformedDocument(err) => {
                write!(f, "Response document has an unexpected shape: {}", err)
            }
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError(error)
    }
}

impl From<json::Error> for RequestError {
    fn from(error: json::Error) -> Self {
        Self::JsonParseError(error)
    }
}

impl From<ParsingError> for RequestError {
    fn from(error: ParsingError) -> Self {
        Self::MalformedDocument(error)
    }
}
