use rmcp::{
    handler::server::{router::tool::ToolRouter, ServerHandler, wrapper::Parameters},
    model::*,
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod client;
pub mod format;
pub mod model;

pub use client::{ClientConfig, FetchError, WeatherClient, DEFAULT_BASE_URL};
pub use model::{ForecastPeriod, RegionId, WeatherResponse};

#[derive(Debug)]
pub struct ForecastServer {
    pub tool_router: ToolRouter<Self>,
    client: WeatherClient,
}

impl Default for ForecastServer {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastServer {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client: WeatherClient::new(config),
        }
    }
}

// Tool parameter structs
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ForecastParams {
    #[serde(rename = "regionId")]
    #[schemars(description = "Region ID for the forecast area (e.g. 400040 for Kurume, Fukuoka)")]
    pub region_id: String,
}

#[rmcp::tool_router]
impl ForecastServer {
    #[rmcp::tool(
        name = "get-forecast",
        description = "Get weather forecast for a location using region ID"
    )]
    pub async fn get_forecast(
        &self,
        Parameters(params): Parameters<ForecastParams>,
    ) -> Result<CallToolResult, McpError> {
        let region = RegionId::new(params.region_id)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(region_id = %region, "get-forecast called");

        let forecast = self.client.forecast(&region).await;
        let output = format::render_forecast(&region, forecast.as_ref());

        Ok(CallToolResult::success(vec![Content::text(output)]))
    }
}

#[rmcp::tool_handler]
impl ServerHandler for ForecastServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Japanese regional weather forecasts from weather.tsukumijima.net. \
                 Call 'get-forecast' with a 'regionId' such as 400040."
                    .into(),
            ),
        }
    }
}
