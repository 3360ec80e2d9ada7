//! Session service trait
//!
//! Session storage lives behind a remote API. This trait is the seam the
//! dashboard talks to, so the HTTP client can be swapped for an in-memory
//! implementation in tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ActiveSession, BillBreakdown, EarningsSummary, StaffInfo, TableId};

/// Remote session storage
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Sessions with a game currently running
    async fn list_active_sessions(&self) -> Result<Vec<ActiveSession>>;

    /// Every recorded session, finished or not
    async fn list_all_sessions(&self) -> Result<Vec<ActiveSession>>;

    /// Record the start of a game on `table`
    async fn start_session(&self, table: TableId, player_name: &str, staff: &StaffInfo)
    -> Result<()>;

    /// Record the end of the game on `table` with its final bill
    async fn end_session(
        &self,
        table: TableId,
        breakdown: &BillBreakdown,
        staff: &StaffInfo,
    ) -> Result<()>;

    /// Earnings totals
    async fn earnings_summary(&self) -> Result<EarningsSummary>;
}
