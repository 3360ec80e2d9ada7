//! Table board
//!
//! The club has a fixed number of tables. The session API only reports the
//! tables that have a game running, so the board fills in the rest as
//! available.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::{CueclubError, Result};
use crate::types::{ActiveSession, TableId};

/// State of a single table on the floor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableState {
    /// Table number
    pub id: TableId,
    /// Whether a game is running
    pub occupied: bool,
    /// Player name, empty for available tables
    pub occupant: String,
    /// When the running game started
    pub start_time: Option<DateTime<Utc>>,
    /// When the game ended, if the API already recorded it
    pub end_time: Option<DateTime<Utc>>,
    /// Recorded bill, if any
    pub bill: Option<f64>,
}

impl TableState {
    /// An available table
    pub fn available(id: TableId) -> Self {
        Self {
            id,
            occupied: false,
            occupant: String::new(),
            start_time: None,
            end_time: None,
            bill: None,
        }
    }

    fn occupied_by(id: TableId, session: &ActiveSession) -> Self {
        Self {
            id,
            occupied: true,
            occupant: session.player_name.clone(),
            start_time: session.start_time,
            end_time: session.end_time,
            bill: session.total_amount,
        }
    }
}

/// All tables, ordered by table number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBoard {
    tables: Vec<TableState>,
}

impl TableBoard {
    /// Lay the active sessions out over tables `1..=table_count`
    ///
    /// A session without a table id is placed by its position in the list.
    /// When several sessions claim the same table the first one wins.
    pub fn from_sessions(sessions: &[ActiveSession], table_count: u32) -> Self {
        let placed: Vec<(TableId, &ActiveSession)> = sessions
            .iter()
            .enumerate()
            .map(|(index, session)| {
                let id = if session.table_id.get() == 0 {
                    TableId::new(index as u32 + 1)
                } else {
                    session.table_id
                };
                (id, session)
            })
            .collect();

        for (id, _) in &placed {
            if id.get() > table_count {
                debug!(
                    "Ignoring session on table {} (club has {} tables)",
                    id, table_count
                );
            }
        }

        let tables = (1..=table_count)
            .map(TableId::new)
            .map(|id| {
                placed
                    .iter()
                    .find(|(table, _)| *table == id)
                    .map(|(_, session)| TableState::occupied_by(id, session))
                    .unwrap_or_else(|| TableState::available(id))
            })
            .collect();

        Self { tables }
    }

    /// All tables
    pub fn tables(&self) -> &[TableState] {
        &self.tables
    }

    /// Look up a table by number
    pub fn get(&self, id: TableId) -> Result<&TableState> {
        self.tables
            .iter()
            .find(|table| table.id == id)
            .ok_or(CueclubError::TableNotFound(id))
    }

    /// Number of tables with a running game
    pub fn occupied_count(&self) -> usize {
        self.tables.iter().filter(|table| table.occupied).count()
    }
}
