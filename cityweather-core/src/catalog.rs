use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::error::{Error, Result, truncate_body};
use crate::model::CityPage;

pub const DEFAULT_BASE_URL: &str = "https://public.opendatasoft.com";

const DATASET_PATH: &str =
    "/api/explore/v2.1/catalog/datasets/geonames-all-cities-with-a-population-1000/records";
const ORDER_BY: &str = "cou_name_en,ascii_name";

/// A paged source of city records.
///
/// The list view only depends on this trait, so tests can script pages
/// without a real HTTP server.
#[async_trait]
pub trait CitySource: Send + Sync + Debug {
    async fn fetch_page(&self, limit: u64, offset: u64) -> Result<CityPage>;
}

/// Catalog client for the Opendatasoft GeoNames "cities with a population
/// over 1000" dataset.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    base_url: String,
    http: Client,
}

impl CityCatalog {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CitySource for CityCatalog {
    async fn fetch_page(&self, limit: u64, offset: u64) -> Result<CityPage> {
        let url = format!("{}{DATASET_PATH}", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("order_by", ORDER_BY.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let page: CityPage = serde_json::from_str(&body)?;

        tracing::debug!(
            offset,
            returned = page.results.len(),
            total_count = page.total_count,
            "fetched city page"
        );

        Ok(page)
    }
}
