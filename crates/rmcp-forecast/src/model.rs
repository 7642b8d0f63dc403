use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Forecast area code in the upstream provider's scheme (e.g. `400040`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionId(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("regionId must not be empty")]
pub struct InvalidRegionId;

impl RegionId {
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRegionId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidRegionId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// weather.tsukumijima.net JSON response structures.
// The upstream schema isn't guaranteed, so every field is optional.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub title: Option<String>,
    pub link: Option<String>,
    pub public_time: Option<String>,
    pub public_time_formatted: Option<String>,
    pub description: Option<Description>,
    pub forecasts: Option<Vec<ForecastPeriod>>,
}

impl WeatherResponse {
    /// Formatted publish time wins over the raw timestamp.
    pub fn published_at(&self) -> Option<&str> {
        self.public_time_formatted
            .as_deref()
            .or(self.public_time.as_deref())
    }

    pub fn periods(&self) -> &[ForecastPeriod] {
        self.forecasts.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Description {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub date_label: Option<String>,
    pub telop: Option<String>,
    pub detail: Option<ForecastDetail>,
    pub temperature: Option<Temperature>,
}

impl ForecastPeriod {
    pub fn max_celsius(&self) -> Option<&str> {
        self.temperature
            .as_ref()
            .and_then(|t| t.max.as_ref())
            .and_then(|v| v.celsius.as_deref())
    }

    pub fn min_celsius(&self) -> Option<&str> {
        self.temperature
            .as_ref()
            .and_then(|t| t.min.as_ref())
            .and_then(|v| v.celsius.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastDetail {
    pub weather: Option<String>,
    pub wind: Option<String>,
    pub wave: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Temperature {
    pub min: Option<TemperatureValue>,
    pub max: Option<TemperatureValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemperatureValue {
    pub celsius: Option<String>,
}
