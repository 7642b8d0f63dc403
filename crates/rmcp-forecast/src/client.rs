use crate::model::{RegionId, WeatherResponse};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://weather.tsukumijima.net";
pub const CLIENT_USER_AGENT: &str = "weather-app/1.0";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upstream origin, without the `/api/forecast` path.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Weather API returned status: {0}")]
    Status(StatusCode),
    #[error("Failed to parse weather data: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl WeatherClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn forecast_url(&self, region: &RegionId) -> String {
        format!(
            "{}/api/forecast?city={}",
            self.base_url,
            urlencoding::encode(region.as_str())
        )
    }

    /// Fetches the forecast for `region`.
    ///
    /// Any failure is logged here and collapsed to `None`; callers never see
    /// partial data.
    pub async fn forecast(&self, region: &RegionId) -> Option<WeatherResponse> {
        match self.fetch_forecast(region).await {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::error!(region_id = %region, error = %e, "forecast request failed");
                None
            }
        }
    }

    pub async fn fetch_forecast(&self, region: &RegionId) -> Result<WeatherResponse, FetchError> {
        let url = self.forecast_url(region);
        tracing::debug!(%url, "requesting forecast");

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Transport)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<WeatherResponse>()
            .await
            .map_err(FetchError::Decode)
    }
}
