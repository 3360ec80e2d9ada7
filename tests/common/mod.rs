//! Common test utilities and helpers for cueclub tests
//!
//! Provides an in-memory session service so the dashboard workflow can be
//! exercised without a running API.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use cueclub::{
    config::ClubConfig,
    error::{CueclubError, Result},
    service::SessionService,
    timezone::TimezoneConfig,
    types::{ActiveSession, BillBreakdown, EarningsSummary, StaffInfo, TableId},
};
use std::sync::Mutex;

/// A call received by the mock service
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Recorded {
    Start {
        table: TableId,
        player: String,
        staff: StaffInfo,
    },
    End {
        table: TableId,
        breakdown: BillBreakdown,
        staff: StaffInfo,
    },
}

/// In-memory stand-in for the session API
#[allow(dead_code)]
#[derive(Default)]
pub struct MockSessionService {
    active: Mutex<Vec<ActiveSession>>,
    history: Vec<ActiveSession>,
    calls: Mutex<Vec<Recorded>>,
    fail_with: Option<(u16, String)>,
}

#[allow(dead_code)]
impl MockSessionService {
    pub fn with_active(active: Vec<ActiveSession>) -> Self {
        Self {
            active: Mutex::new(active),
            ..Default::default()
        }
    }

    pub fn with_history(mut self, history: Vec<ActiveSession>) -> Self {
        self.history = history;
        self
    }

    /// Every request fails with the given API status
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            fail_with: Some((status, message.to_string())),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        match &self.fail_with {
            Some((status, message)) => Err(CueclubError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SessionService for MockSessionService {
    async fn list_active_sessions(&self) -> Result<Vec<ActiveSession>> {
        self.check()?;
        Ok(self.active.lock().unwrap().clone())
    }

    async fn list_all_sessions(&self) -> Result<Vec<ActiveSession>> {
        self.check()?;
        Ok(self.history.clone())
    }

    async fn start_session(
        &self,
        table: TableId,
        player_name: &str,
        staff: &StaffInfo,
    ) -> Result<()> {
        self.check()?;
        self.active
            .lock()
            .unwrap()
            .push(session(table.get(), player_name, Some(Utc::now())));
        self.calls.lock().unwrap().push(Recorded::Start {
            table,
            player: player_name.to_string(),
            staff: staff.clone(),
        });
        Ok(())
    }

    async fn end_session(
        &self,
        table: TableId,
        breakdown: &BillBreakdown,
        staff: &StaffInfo,
    ) -> Result<()> {
        self.check()?;
        self.active
            .lock()
            .unwrap()
            .retain(|s| s.table_id != table);
        self.calls.lock().unwrap().push(Recorded::End {
            table,
            breakdown: *breakdown,
            staff: staff.clone(),
        });
        Ok(())
    }

    async fn earnings_summary(&self) -> Result<EarningsSummary> {
        self.check()?;
        let total: f64 = self.history.iter().filter_map(|s| s.total_amount).sum();
        Ok(EarningsSummary {
            total_earnings: Some(total),
            total_sessions: Some(self.history.len() as u64),
            ..Default::default()
        })
    }
}

/// A UTC timestamp on a fixed test day
#[allow(dead_code)]
pub fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, second)
        .unwrap()
}

/// A running session on `table`
#[allow(dead_code)]
pub fn session(table: u32, player: &str, start: Option<DateTime<Utc>>) -> ActiveSession {
    ActiveSession {
        table_id: TableId::new(table),
        player_name: player.to_string(),
        start_time: start,
        end_time: None,
        total_amount: None,
    }
}

/// A three-table club billing 950 per hour, in UTC
#[allow(dead_code)]
pub fn test_config() -> ClubConfig {
    ClubConfig::new(
        "http://localhost:8080/api",
        950.0,
        3,
        StaffInfo::new("Dilani", "staff-7"),
        TimezoneConfig::utc(),
    )
    .unwrap()
}
