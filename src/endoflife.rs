use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::domain::ReleaseCycle;
use crate::error::EolError;

pub trait EolClient: Send + Sync {
    fn fetch_all_products(&self) -> Result<Vec<String>, EolError>;
    fn fetch_cycles(&self, product: &str) -> Result<Vec<ReleaseCycle>, EolError>;
    fn fetch_cycle(&self, product: &str, cycle: &str) -> Result<ReleaseCycle, EolError>;
}

#[derive(Clone)]
pub struct EolHttpClient {
    client: Client,
    base_url: String,
}

impl EolHttpClient {
    pub fn new() -> Result<Self, EolError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("eol-mcp/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| EolError::EndoflifeHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| EolError::EndoflifeHttp(err.to_string()))?;
        Ok(Self {
            client,
            base_url: "https://endoflife.date/api".to_string(),
        })
    }

    fn all_products_url(&self) -> String {
        format!("{}/all.json", self.base_url)
    }

    fn cycles_url(&self, product: &str) -> String {
        format!("{}/{}.json", self.base_url, product)
    }

    fn cycle_url(&self, product: &str, cycle: &str) -> String {
        format!("{}/{}/{}.json", self.base_url, product, cycle)
    }

    fn handle_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, EolError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .unwrap_or_else(|_| "endoflife.date request failed".to_string());
        Err(EolError::EndoflifeStatus { status, message })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, EolError> {
        tracing::debug!(%url, "querying endoflife.date");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| EolError::EndoflifeHttp(err.to_string()))?;
        let response = Self::handle_status(response)?;
        let body = response
            .text()
            .map_err(|err| EolError::EndoflifeHttp(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| EolError::Decode(err.to_string()))
    }
}

impl EolClient for EolHttpClient {
    fn fetch_all_products(&self) -> Result<Vec<String>, EolError> {
        self.get_json(&self.all_products_url())
    }

    fn fetch_cycles(&self, product: &str) -> Result<Vec<ReleaseCycle>, EolError> {
        self.get_json(&self.cycles_url(product))
    }

    fn fetch_cycle(&self, product: &str, cycle: &str) -> Result<ReleaseCycle, EolError> {
        self.get_json(&self.cycle_url(product, cycle))
    }
}
