use std::fmt;

use once_cell::sync::OnceCell;

use crate::model::{
    champion::{Champion, ChampionDetail},
    ids::ChampionId,
};

use super::ddragon::client::{ClientInitError, DdragonClient, RequestError};

/// Owns the loaded catalog and the active data version. The catalog is
/// populated once during `new` and read-only afterwards; there is no refresh
/// short of restarting the program.
pub struct DataManager {
    client: DdragonClient,
    locale: String,
    version: String,
    catalog_cache: OnceCell<Vec<Champion>>,
}

impl DataManager {
    /// Startup sequence: resolve the data version (unless pinned), then load
    /// the full catalog. Failure of either step is fatal for the caller.
    pub fn new(locale: String, version_override: Option<String>) -> Result<Self, DataManagerInitError> {
        let client = DdragonClient::new()?;
        let version = match version_override {
            Some(version) => version,
            None => DataManager::retrieve_latest_version(&client)?,
        };

        let manager = Self {
            client,
            locale,
            version,
            catalog_cache: OnceCell::new(),
        };
        manager.ensure_catalog()?;
        Ok(manager)
    }

    fn retrieve_latest_version(client: &DdragonClient) -> Result<String, DataManagerInitError> {
        let versions = client
            .fetch_versions()
            .map_err(DataManagerInitError::VersionFetch)?;
        // Element 0 is assumed to be the newest patch; the parser guarantees
        // the list is non-empty.
        Ok(versions[0].clone())
    }

    fn ensure_catalog(&self) -> Result<&Vec<Champion>, DataManagerInitError> {
        self.catalog_cache.get_or_try_init(|| {
            self.client
                .fetch_catalog(&self.version, &self.locale)
                .map_err(DataManagerInitError::CatalogFetch)
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn champions(&self) -> &[Champion] {
        self.catalog_cache.get().unwrap()
    }

    pub fn champion(&self, id: &ChampionId) -> Option<&Champion> {
        self.champions().iter().find(|c| &c.id == id)
    }

    /// Cheap handle for background threads to run detail fetches without
    /// borrowing the manager.
    pub fn detail_fetcher(&self) -> DetailFetcher {
        DetailFetcher {
            client: self.client.clone(),
            version: self.version.clone(),
            locale: self.locale.clone(),
        }
    }
}

#[derive(Clone)]
pub struct DetailFetcher {
    client: DdragonClient,
    version: String,
    locale: String,
}

impl DetailFetcher {
    /// One uncached network request per invocation.
    pub fn fetch(&self, id: &ChampionId) -> Result<ChampionDetail, DataRetrievalError> {
        let detail = self.client.fetch_champion(&self.version, &self.locale, id)?;
        Ok(detail)
    }
}

#[derive(Debug)]
pub enum DataManagerInitError {
    ClientFailed(ClientInitError),
    VersionFetch(RequestError),
    CatalogFetch(RequestError),
}

impl fmt::Display for DataManagerInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataManagerInitError::ClientFailed(err) => write!(f, "HTTP client setup failed: {}", err),
            DataManagerInitError::VersionFetch(err) => {
                write!(f, "Could not resolve the current data version: {}", err)
            }
            DataManagerInitError::CatalogFetch(err) => {
                write!(f, "Could not load the champion catalog: {}", err)
            }
        }
    }
}

impl From<ClientInitError> for DataManagerInitError {
    fn from(error: ClientInitError) -> Self {
        Self::ClientFailed(error)
    }
}

/// Non-fatal failure of a per-champion detail fetch; scoped to one overlay.
/// "Champion not found" and "network unreachable" are not distinguished.
#[derive(Debug)]
pub enum DataRetrievalError {
    DetailFetch(RequestError),
}

impl fmt::Display for DataRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRetrievalError::DetailFetch(err) => write!(f, "Detail fetch failed: {}", err),
        }
    }
}

impl From<RequestError> for DataRetrievalError {
    fn from(error: RequestError) -> Self {
        Self::DetailFetch(error)
    }
}
