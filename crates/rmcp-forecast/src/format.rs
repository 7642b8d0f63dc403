//! Plain-text rendering of forecast payloads.

use crate::model::{ForecastPeriod, RegionId, WeatherResponse};

pub const NO_DATA_MESSAGE: &str = "No forecast data available.";
pub const PERIOD_SEPARATOR: &str = "---";

pub fn failure_text(region: &RegionId) -> String {
    format!(
        "Failed to retrieve weather data for region ID \"{}\". The region ID may be invalid.",
        region
    )
}

pub fn fallback_title(region: &RegionId) -> String {
    format!("Weather forecast for region {}", region)
}

/// Renders the tool response for `region`. `None` means the fetch failed.
pub fn render_forecast(region: &RegionId, forecast: Option<&WeatherResponse>) -> String {
    let Some(data) = forecast else {
        return failure_text(region);
    };

    let periods = data.periods();
    if periods.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let mut lines = vec![data.title.clone().unwrap_or_else(|| fallback_title(region))];

    if let Some(time) = data.published_at() {
        lines.push(format!("Published at: {}", time));
    }

    if let Some(text) = data.description.as_ref().and_then(|d| d.text.as_deref()) {
        lines.push(String::new());
        lines.push("Overview:".to_string());
        lines.push(text.to_string());
    }

    lines.push(String::new());
    lines.push("Forecast:".to_string());
    lines.push(
        periods
            .iter()
            .map(render_period)
            .collect::<Vec<_>>()
            .join("\n\n"),
    );

    if let Some(link) = &data.link {
        lines.push(String::new());
        lines.push(format!("More info: {}", link));
    }

    lines.join("\n")
}

pub fn render_period(period: &ForecastPeriod) -> String {
    let mut lines = vec![
        format!("{}:", period.date_label.as_deref().unwrap_or("Unknown")),
        format!("Weather: {}", period.telop.as_deref().unwrap_or("unknown")),
    ];

    if let Some(max) = period.max_celsius() {
        lines.push(format!("Max temperature: {}°C", max));
    }
    if let Some(min) = period.min_celsius() {
        lines.push(format!("Min temperature: {}°C", min));
    }

    if let Some(detail) = &period.detail {
        if let Some(weather) = &detail.weather {
            lines.push(format!("Details: {}", weather));
        }
        if let Some(wind) = &detail.wind {
            lines.push(format!("Wind: {}", wind));
        }
        if let Some(wave) = &detail.wave {
            lines.push(format!("Waves: {}", wave));
        }
    }

    lines.push(PERIOD_SEPARATOR.to_string());
    lines.join("\n")
}
