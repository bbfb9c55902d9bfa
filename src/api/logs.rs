//! Usage log endpoints (admin section): date-filtered listing and CSV
//! export.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::models::LogEntry;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    /// Inclusive lower bound on the log timestamp.
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the log timestamp.
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}

fn filter_logs(logs: Vec<LogEntry>, query: &LogsQuery) -> Vec<LogEntry> {
    logs.into_iter()
        .filter(|log| {
            if let Some(from) = query.from {
                if log.timestamp < from {
                    return false;
                }
            }
            if let Some(to) = query.to {
                if log.timestamp > to {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// GET /api/logs - Launch events, newest first, optionally bounded by
/// `from`/`to`.
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> ApiResult<Vec<LogEntry>> {
    success(filter_logs(state.store.list_logs(), &query))
}

/// Render logs as CSV. Fields are joined with literal commas with no
/// quoting or escaping, matching the original export.
fn to_csv(logs: &[LogEntry]) -> String {
    let mut lines = vec!["Tool Name,User,Department,Timestamp".to_string()];
    for log in logs {
        lines.push(format!(
            "{},{},{},{}",
            log.tool_name,
            log.user_name,
            log.department,
            log.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        ));
    }
    lines.join("\n")
}

/// GET /api/logs/export - The filtered logs as a CSV download.
pub async fn export_logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Response {
    let logs = filter_logs(state.store.list_logs(), &query);
    let csv = to_csv(&logs);
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"usage_logs.csv\"",
            ),
        ],
        csv,
    )
        .into_response()
}
