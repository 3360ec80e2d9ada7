//! Start/end game workflow
//!
//! The dashboard sits between the staff and the session API: it lays the
//! running sessions out over the club's tables, validates start requests,
//! and bills a game when it ends.
//!
//! Ending a game takes two steps. [`Dashboard::prepare_end`] captures the
//! end time and computes the receipt; [`Dashboard::finalize_end`] posts it.
//! Staff confirm the receipt in between.

use chrono::{DateTime, Utc};
use cueclub_billing::BillCalculator;
use cueclub_core::board::{TableBoard, TableState};
use cueclub_core::config::ClubConfig;
use cueclub_core::error::{CueclubError, Result};
use cueclub_core::service::SessionService;
use cueclub_core::types::{ActiveSession, EarningsSummary, SessionReceipt, TableId, TimeInterval};
use tracing::{debug, info};

/// Table management on top of a session service
pub struct Dashboard<S: SessionService> {
    service: S,
    config: ClubConfig,
    calculator: BillCalculator,
}

impl<S: SessionService> Dashboard<S> {
    /// Create a dashboard for the given service and configuration
    pub fn new(service: S, config: ClubConfig) -> Self {
        let calculator = BillCalculator::new(config.rate);
        Self {
            service,
            config,
            calculator,
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &ClubConfig {
        &self.config
    }

    /// The underlying session service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Current state of every table
    pub async fn board(&self) -> Result<TableBoard> {
        let sessions = self.service.list_active_sessions().await?;
        let board = TableBoard::from_sessions(&sessions, self.config.table_count);
        debug!(
            "{} of {} tables occupied",
            board.occupied_count(),
            self.config.table_count
        );
        Ok(board)
    }

    /// Validate a start request without sending it
    ///
    /// Returns the (available) table the game would start on.
    pub async fn check_start(&self, table: TableId, player_name: &str) -> Result<TableState> {
        if player_name.trim().is_empty() {
            return Err(CueclubError::MissingPlayerName);
        }

        let board = self.board().await?;
        let state = board.get(table)?;
        if state.occupied {
            return Err(CueclubError::TableOccupied(table));
        }
        Ok(state.clone())
    }

    /// Start a game for `player_name` on `table`
    pub async fn start_game(&self, table: TableId, player_name: &str) -> Result<()> {
        self.check_start(table, player_name).await?;

        let player_name = player_name.trim();
        self.service
            .start_session(table, player_name, &self.config.staff)
            .await?;
        info!("Game started for table {} ({})", table, player_name);
        Ok(())
    }

    /// Compute the receipt for ending the game on `table` at `now`
    pub async fn prepare_end(&self, table: TableId, now: DateTime<Utc>) -> Result<SessionReceipt> {
        let board = self.board().await?;
        let state = board.get(table)?;
        if !state.occupied {
            return Err(CueclubError::TableNotOccupied(table));
        }

        let interval = TimeInterval::new(state.start_time, Some(now));
        let breakdown = self.calculator.compute(&interval);

        Ok(SessionReceipt {
            table_id: table,
            player_name: state.occupant.clone(),
            start_time: state.start_time,
            end_time: now,
            breakdown,
        })
    }

    /// Post a confirmed receipt to the session API
    pub async fn finalize_end(&self, receipt: &SessionReceipt) -> Result<()> {
        self.service
            .end_session(receipt.table_id, &receipt.breakdown, &self.config.staff)
            .await?;
        info!(
            "Game ended for table {}: {:.2}",
            receipt.table_id, receipt.breakdown.total_bill
        );
        Ok(())
    }

    /// Every recorded session
    pub async fn history(&self) -> Result<Vec<ActiveSession>> {
        self.service.list_all_sessions().await
    }

    /// Earnings totals
    pub async fn earnings(&self) -> Result<EarningsSummary> {
        self.service.earnings_summary().await
    }
}
