//! Session API client
//!
//! Talks JSON over HTTP to the billiard-table session API:
//!
//! | Operation | Request |
//! |---|---|
//! | active sessions | `GET BilliardTable/GetAllBilliardTableActiveSessions` |
//! | all sessions | `GET BilliardTable/GetAllBilliardTableSessions` |
//! | start game | `POST BilliardTable/StartGame` |
//! | end game | `POST BilliardTable/EndGame` |
//! | earnings | `GET BilliardTable/GetEarningsSummary` |

use async_trait::async_trait;
use cueclub_core::config::ClubConfig;
use cueclub_core::error::{CueclubError, Result};
use cueclub_core::service::SessionService;
use cueclub_core::timezone::TimezoneConfig;
use cueclub_core::types::{
    ActiveSession, BillBreakdown, EarningsSummary, RawSessionRecord, StaffInfo, TableId,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

const ACTIVE_SESSIONS_PATH: &str = "BilliardTable/GetAllBilliardTableActiveSessions";
const ALL_SESSIONS_PATH: &str = "BilliardTable/GetAllBilliardTableSessions";
const START_GAME_PATH: &str = "BilliardTable/StartGame";
const END_GAME_PATH: &str = "BilliardTable/EndGame";
const EARNINGS_SUMMARY_PATH: &str = "BilliardTable/GetEarningsSummary";

/// Body of a start-game request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameRequest<'a> {
    pub table_id: TableId,
    pub player_name: &'a str,
    pub game_started_staff_name: &'a str,
    pub created_by: &'a str,
}

/// Body of an end-game request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndGameRequest<'a> {
    pub table_id: TableId,
    #[serde(rename = "totaltimeinminutes")]
    pub total_time_in_minutes: i64,
    pub base_amount: f64,
    pub additional_amount: f64,
    pub total_amount: f64,
    pub game_ended_staff_name: &'a str,
    pub updated_by: &'a str,
}

impl<'a> EndGameRequest<'a> {
    /// Build the request from a computed bill
    pub fn new(table_id: TableId, breakdown: &BillBreakdown, staff: &'a StaffInfo) -> Self {
        Self {
            table_id,
            total_time_in_minutes: breakdown.total_minutes,
            base_amount: breakdown.initial_charge,
            additional_amount: breakdown.additional_charge,
            total_amount: breakdown.total_bill,
            game_ended_staff_name: &staff.name,
            updated_by: &staff.id,
        }
    }
}

/// Session API over HTTP
pub struct HttpSessionClient {
    /// Base URL without trailing slash
    base_url: String,
    /// Timezone naive API timestamps are read in
    timezone: TimezoneConfig,
    /// HTTP client
    client: reqwest::Client,
}

impl HttpSessionClient {
    /// Create a client for the API at `base_url`
    pub fn new(base_url: impl Into<String>, timezone: TimezoneConfig) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timezone,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from the club configuration
    pub fn from_config(config: &ClubConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.timezone.clone())
    }

    /// Full URL for an API path
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turn non-success responses into `CueclubError::Api`
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("unknown status").to_string()
        } else {
            body
        };
        warn!("Session API returned {}: {}", status.as_u16(), message);
        Err(CueclubError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        let response = Self::check_status(response).await?;

        // The API echoes the stored record; only its presence matters here
        let echoed = response.text().await?;
        debug!("{} responded with {} bytes", path, echoed.len());
        Ok(())
    }

    async fn fetch_sessions(&self, path: &str) -> Result<Vec<ActiveSession>> {
        let records: Vec<RawSessionRecord> = self.get_json(path).await?;
        Ok(records
            .into_iter()
            .map(|raw| ActiveSession::from_raw(raw, &self.timezone.tz))
            .collect())
    }
}

#[async_trait]
impl SessionService for HttpSessionClient {
    async fn list_active_sessions(&self) -> Result<Vec<ActiveSession>> {
        let sessions = self.fetch_sessions(ACTIVE_SESSIONS_PATH).await?;
        debug!("Fetched {} active sessions", sessions.len());
        Ok(sessions)
    }

    async fn list_all_sessions(&self) -> Result<Vec<ActiveSession>> {
        self.fetch_sessions(ALL_SESSIONS_PATH).await
    }

    async fn start_session(
        &self,
        table: TableId,
        player_name: &str,
        staff: &StaffInfo,
    ) -> Result<()> {
        let request = StartGameRequest {
            table_id: table,
            player_name,
            game_started_staff_name: &staff.name,
            created_by: &staff.id,
        };
        self.post_json(START_GAME_PATH, &request).await?;
        info!("Game started on table {} for {}", table, player_name);
        Ok(())
    }

    async fn end_session(
        &self,
        table: TableId,
        breakdown: &BillBreakdown,
        staff: &StaffInfo,
    ) -> Result<()> {
        let request = EndGameRequest::new(table, breakdown, staff);
        self.post_json(END_GAME_PATH, &request).await?;
        info!(
            "Game ended on table {}: {:.2} for {} minutes",
            table, breakdown.total_bill, breakdown.total_minutes
        );
        Ok(())
    }

    async fn earnings_summary(&self) -> Result<EarningsSummary> {
        self.get_json(EARNINGS_SUMMARY_PATH).await
    }
}
