//! Output formatting module for cueclub
//!
//! This module provides formatters for displaying club data in different formats:
//! - Table format for the staff at the counter
//! - JSON format for scripts and integration with other tools
//!
//! # Examples
//!
//! ```
//! use cueclub_core::board::TableBoard;
//! use cueclub_core::timezone::TimezoneConfig;
//! use cueclub_terminal::get_formatter;
//!
//! let board = TableBoard::from_sessions(&[], 3);
//! let tz = TimezoneConfig::utc();
//!
//! let formatter = get_formatter(false);
//! let output = formatter.format_board(&board, &tz);
//! assert!(output.contains("Available"));
//! ```

use colored::Colorize;
use cueclub_core::board::TableBoard;
use cueclub_core::timezone::TimezoneConfig;
use cueclub_core::types::{ActiveSession, BillBreakdown, EarningsSummary, SessionReceipt};
use prettytable::{Table, format, row};
use serde_json::json;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the state of every table
    fn format_board(&self, board: &TableBoard, tz: &TimezoneConfig) -> String;

    /// Format the receipt shown when a game ends
    fn format_receipt(&self, receipt: &SessionReceipt, tz: &TimezoneConfig) -> String;

    /// Format a bare bill breakdown
    fn format_bill(&self, breakdown: &BillBreakdown) -> String;

    /// Format past and running sessions
    fn format_history(&self, sessions: &[ActiveSession], tz: &TimezoneConfig) -> String;

    /// Format the earnings summary
    fn format_earnings(&self, summary: &EarningsSummary) -> String;
}

/// Table formatter for human-readable output
pub struct TableFormatter;

impl TableFormatter {
    /// Format an amount in rupees
    fn format_currency(amount: f64) -> String {
        format!("Rs {amount:.2}")
    }

    fn new_table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table
    }

    /// Label/value table with the breakdown lines a receipt shows
    ///
    /// Additional minutes and charge only appear when non-zero.
    fn breakdown_rows(table: &mut Table, breakdown: &BillBreakdown) {
        table.add_row(row![
            "Total Time",
            r -> format!("{} minutes", breakdown.total_minutes)
        ]);
        table.add_row(row![
            "Initial Charge (1 hour)",
            r -> Self::format_currency(breakdown.initial_charge)
        ]);
        if breakdown.additional_minutes > 0 {
            table.add_row(row![
                "Additional Time",
                r -> format!("{} minutes", breakdown.additional_minutes)
            ]);
        }
        if breakdown.additional_charge > 0.0 {
            table.add_row(row![
                "Additional Charge",
                r -> Self::format_currency(breakdown.additional_charge)
            ]);
        }
        table.add_row(row![
            b -> "Total Bill",
            rb -> Self::format_currency(breakdown.total_bill)
        ]);
    }

    fn optional_time(time: Option<&chrono::DateTime<chrono::Utc>>, tz: &TimezoneConfig) -> String {
        time.map(|t| tz.format_time(t))
            .unwrap_or_else(|| "-".to_string())
    }
}

impl OutputFormatter for TableFormatter {
    fn format_board(&self, board: &TableBoard, tz: &TimezoneConfig) -> String {
        let mut table = Self::new_table();
        table.set_titles(row![
            b -> "Table",
            b -> "Status",
            b -> "Player",
            b -> "Start Time"
        ]);

        for state in board.tables() {
            if state.occupied {
                table.add_row(row![
                    c -> state.id,
                    Fr -> "Game Started",
                    state.occupant,
                    Self::optional_time(state.start_time.as_ref(), tz)
                ]);
            } else {
                table.add_row(row![c -> state.id, Fg -> "Available", "-", "-"]);
            }
        }

        format!(
            "{}\n{} of {} tables in use (times in {})\n",
            table,
            board.occupied_count(),
            board.tables().len(),
            tz.display_name()
        )
    }

    fn format_receipt(&self, receipt: &SessionReceipt, tz: &TimezoneConfig) -> String {
        let mut output = format!(
            "{}\n",
            format!("End Game Receipt - Table {}", receipt.table_id).bold()
        );

        let mut table = Self::new_table();
        table.set_titles(row![b -> "Item", b -> "Value"]);
        table.add_row(row!["Player", r -> receipt.player_name]);
        table.add_row(row![
            "Start Time",
            r -> Self::optional_time(receipt.start_time.as_ref(), tz)
        ]);
        table.add_row(row!["End Time", r -> tz.format_time(&receipt.end_time)]);
        Self::breakdown_rows(&mut table, &receipt.breakdown);

        output.push_str(&table.to_string());
        output
    }

    fn format_bill(&self, breakdown: &BillBreakdown) -> String {
        let mut table = Self::new_table();
        table.set_titles(row![b -> "Item", b -> "Value"]);
        Self::breakdown_rows(&mut table, breakdown);
        table.to_string()
    }

    fn format_history(&self, sessions: &[ActiveSession], tz: &TimezoneConfig) -> String {
        let mut table = Self::new_table();
        table.set_titles(row![
            b -> "Table",
            b -> "Player",
            b -> "Start",
            b -> "End",
            b -> "Duration",
            b -> "Amount"
        ]);

        let mut total = 0.0;
        for session in sessions {
            let start = session
                .start_time
                .map(|t| tz.format_datetime(&t))
                .unwrap_or_else(|| "-".to_string());
            let end = match session.end_time {
                Some(t) => tz.format_datetime(&t),
                None => "running".to_string(),
            };
            let duration = match (session.start_time, session.end_time) {
                (Some(start), Some(end)) => format!("{}m", (end - start).num_minutes()),
                _ => "-".to_string(),
            };
            let amount = session
                .total_amount
                .map(Self::format_currency)
                .unwrap_or_else(|| "-".to_string());
            total += session.total_amount.unwrap_or(0.0);

            table.add_row(row![
                c -> session.table_id,
                session.player_name,
                start,
                end,
                r -> duration,
                r -> amount
            ]);
        }

        table.add_row(row![b -> "TOTAL", "", "", "", "", rb -> Self::format_currency(total)]);
        table.to_string()
    }

    fn format_earnings(&self, summary: &EarningsSummary) -> String {
        let mut table = Self::new_table();
        table.set_titles(row![b -> "Metric", b -> "Value"]);

        if let Some(total) = summary.total_earnings {
            table.add_row(row!["Total Earnings", r -> Self::format_currency(total)]);
        }
        if let Some(today) = summary.today_earnings {
            table.add_row(row!["Today's Earnings", r -> Self::format_currency(today)]);
        }
        if let Some(sessions) = summary.total_sessions {
            table.add_row(row!["Sessions", r -> sessions]);
        }
        for (key, value) in &summary.extra {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            table.add_row(row![key, r -> value]);
        }

        table.to_string()
    }
}

/// JSON formatter for machine-readable output
///
/// Money stays numeric and times are RFC 3339 in UTC.
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty(value: serde_json::Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_default()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_board(&self, board: &TableBoard, tz: &TimezoneConfig) -> String {
        Self::pretty(json!({
            "timezone": tz.display_name(),
            "tables": board.tables().iter().map(|t| json!({
                "id": t.id,
                "occupied": t.occupied,
                "occupant": t.occupant,
                "startTime": t.start_time.map(|s| s.to_rfc3339()),
                "endTime": t.end_time.map(|e| e.to_rfc3339()),
                "bill": t.bill,
            })).collect::<Vec<_>>(),
            "occupied": board.occupied_count(),
        }))
    }

    fn format_receipt(&self, receipt: &SessionReceipt, _tz: &TimezoneConfig) -> String {
        Self::pretty(json!({
            "tableId": receipt.table_id,
            "playerName": receipt.player_name,
            "startTime": receipt.start_time.map(|s| s.to_rfc3339()),
            "endTime": receipt.end_time.to_rfc3339(),
            "breakdown": receipt.breakdown,
        }))
    }

    fn format_bill(&self, breakdown: &BillBreakdown) -> String {
        Self::pretty(json!(breakdown))
    }

    fn format_history(&self, sessions: &[ActiveSession], _tz: &TimezoneConfig) -> String {
        let total: f64 = sessions.iter().filter_map(|s| s.total_amount).sum();
        Self::pretty(json!({
            "sessions": sessions.iter().map(|s| json!({
                "tableId": s.table_id,
                "playerName": s.player_name,
                "startTime": s.start_time.map(|t| t.to_rfc3339()),
                "endTime": s.end_time.map(|t| t.to_rfc3339()),
                "totalAmount": s.total_amount,
            })).collect::<Vec<_>>(),
            "totalAmount": total,
        }))
    }

    fn format_earnings(&self, summary: &EarningsSummary) -> String {
        Self::pretty(json!(summary))
    }
}

/// Pick the formatter for the requested output mode
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}
