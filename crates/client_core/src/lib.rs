use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use shared::{
    domain::{Page, Pokemon, PokemonSummary},
    error::CatalogError,
};
use tracing::debug;

pub mod controller;
pub mod theme;

pub use controller::ViewController;
pub use theme::ThemeContext;

/// One page worth of index data: the catalog-wide record count plus the
/// ordered summary references for the requested slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPage {
    pub count: u64,
    pub results: Vec<PokemonSummary>,
}

/// Read-only access to the remote catalog service.
#[async_trait]
pub trait PokedexGateway: Send + Sync {
    async fn fetch_index(&self, offset: u32, limit: u32) -> Result<IndexPage, CatalogError>;
    async fn fetch_detail(&self, detail_url: &str) -> Result<Pokemon, CatalogError>;
    async fn fetch_by_name(&self, name: &str) -> Result<Pokemon, CatalogError>;
}

#[derive(Debug, Deserialize)]
struct IndexResponse {
    count: u64,
    results: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
struct IndexEntry {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    name: String,
    base_experience: i64,
    height: i64,
    weight: i64,
    abilities: Vec<AbilityEntry>,
    sprites: SpriteSet,
}

#[derive(Debug, Deserialize)]
struct AbilityEntry {
    ability: AbilityRef,
}

#[derive(Debug, Deserialize)]
struct AbilityRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpriteSet {
    front_default: Option<String>,
}

impl From<DetailResponse> for Pokemon {
    fn from(value: DetailResponse) -> Self {
        Self {
            name: value.name,
            base_experience: value.base_experience,
            height: value.height,
            weight: value.weight,
            abilities: value
                .abilities
                .into_iter()
                .map(|entry| entry.ability.name)
                .collect(),
            sprite_url: value.sprites.front_default,
        }
    }
}

fn map_transport_error(err: reqwest::Error) -> CatalogError {
    if err.is_decode() {
        CatalogError::MalformedResponse(err.to_string())
    } else {
        CatalogError::Fetch(err.to_string())
    }
}

/// reqwest-backed gateway against a PokéAPI-shaped REST service.
pub struct RestPokedexGateway {
    http: Client,
    base_url: String,
}

impl RestPokedexGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PokedexGateway for RestPokedexGateway {
    async fn fetch_index(&self, offset: u32, limit: u32) -> Result<IndexPage, CatalogError> {
        debug!(offset, limit, "fetching catalog index");
        let body: IndexResponse = self
            .http
            .get(format!(
                "{}/pokemon?offset={offset}&limit={limit}",
                self.base_url
            ))
            .send()
            .await
            .map_err(map_transport_error)?
            .error_for_status()
            .map_err(map_transport_error)?
            .json()
            .await
            .map_err(map_transport_error)?;
        Ok(IndexPage {
            count: body.count,
            results: body
                .results
                .into_iter()
                .map(|entry| PokemonSummary {
                    name: entry.name,
                    detail_url: entry.url,
                })
                .collect(),
        })
    }

    async fn fetch_detail(&self, detail_url: &str) -> Result<Pokemon, CatalogError> {
        debug!(detail_url, "fetching detail record");
        let body: DetailResponse = self
            .http
            .get(detail_url)
            .send()
            .await
            .map_err(map_transport_error)?
            .error_for_status()
            .map_err(map_transport_error)?
            .json()
            .await
            .map_err(map_transport_error)?;
        Ok(body.into())
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Pokemon, CatalogError> {
        let normalized = name.to_lowercase();
        debug!(name = %normalized, "fetching by name");
        let response = self
            .http
            .get(format!("{}/pokemon/{normalized}", self.base_url))
            .send()
            .await
            .map_err(map_transport_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(normalized));
        }
        let body: DetailResponse = response
            .error_for_status()
            .map_err(map_transport_error)?
            .json()
            .await
            .map_err(map_transport_error)?;
        Ok(body.into())
    }
}

/// `total_page_count` for a catalog of `total_count` records sliced into
/// pages of `page_size`.
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    total_count.div_ceil(u64::from(page_size)) as u32
}

/// Resolves one catalog page: index lookup followed by a concurrent fan-out
/// of detail fetches, assembled in index order.
pub struct PageLoader {
    gateway: Arc<dyn PokedexGateway>,
}

impl PageLoader {
    pub fn new(gateway: Arc<dyn PokedexGateway>) -> Self {
        Self { gateway }
    }

    /// Loads the fully resolved page `page_number` (1-based).
    ///
    /// All detail fetches run concurrently; the first failure fails the
    /// whole call and no partial page is ever returned. Bounds checking is
    /// the caller's job. An index response with zero results yields a valid
    /// empty page.
    pub async fn load_page(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page, CatalogError> {
        let offset = page_number.saturating_sub(1) * page_size;
        let index = self.gateway.fetch_index(offset, page_size).await?;
        let items = futures::future::try_join_all(
            index
                .results
                .iter()
                .map(|summary| self.gateway.fetch_detail(&summary.detail_url)),
        )
        .await?;
        debug!(
            page_number,
            resolved = items.len(),
            total = index.count,
            "page assembled"
        );
        Ok(Page {
            page_number,
            items,
            total_page_count: total_pages(index.count, page_size),
        })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
