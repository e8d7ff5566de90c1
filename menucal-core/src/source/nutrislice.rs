//! Nutrislice weeks endpoint client.

use chrono::{Datelike, NaiveDate};

use super::MenuSource;
use crate::config::MenuCalConfig;
use crate::constants::FETCH_TIMEOUT;
use crate::error::{FetchError, MenuCalError, MenuCalResult};
use crate::payload::WeekPayload;

/// HTTP client for `https://{district}.api.nutrislice.com/menu/api/weeks/...`
pub struct NutrisliceClient {
    http: reqwest::Client,
    config: MenuCalConfig,
}

impl NutrisliceClient {
    pub fn new(config: &MenuCalConfig) -> MenuCalResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(format!("menucal/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MenuCalError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(NutrisliceClient {
            http,
            config: config.clone(),
        })
    }

    async fn get_week(&self, monday: NaiveDate) -> Result<WeekPayload, FetchError> {
        self.get_url(&build_week_url(&self.config, monday)).await
    }

    /// GET `url` and decode the body as a weekly payload.
    async fn get_url(&self, url: &str) -> Result<WeekPayload, FetchError> {
        let response = self.http.get(url).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl MenuSource for NutrisliceClient {
    fn fetch_week(
        &self,
        monday: NaiveDate,
    ) -> impl Future<Output = Result<WeekPayload, FetchError>> {
        self.get_week(monday)
    }
}

/// Weeks-API URL for the week containing `date`.
///
/// Month and day are not zero-padded, matching the paths the Nutrislice web
/// app requests.
pub fn build_week_url(config: &MenuCalConfig, date: NaiveDate) -> String {
    format!(
        "https://{}.api.nutrislice.com/menu/api/weeks/school/{}/menu-type/{}/{}/{}/{}/?format=json",
        config.district,
        config.school,
        config.meal_type,
        date.year(),
        date.month(),
        date.day()
    )
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(FETCH_TIMEOUT.as_secs())
    } else {
        FetchError::Transport(e.to_string())
    }
}
