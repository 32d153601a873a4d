use rmcp::{ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult};
use serde::{Deserialize, Serialize};

use crate::server::VacationMcpServer;

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeIdParams {
    /// Employee identifier, e.g. "E001".
    pub employee_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogVacationDayParams {
    /// Employee identifier, e.g. "E001".
    pub employee_id: String,
    /// Dates to log, in order, e.g. ["2023-04-01", "2023-04-02"].
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemainingDaysResponse {
    /// The requested employee.
    pub employee_id: String,
    /// Entitlement minus logged days. Negative if overdrawn.
    pub remaining_days: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogVacationDayResponse {
    /// The employee the dates were logged for.
    pub employee_id: String,
    /// Confirmation message.
    pub message: String,
    /// Number of dates logged.
    pub logged: usize,
    /// Balance after logging.
    pub remaining_days: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VacationHistoryResponse {
    /// The requested employee.
    pub employee_id: String,
    /// Logged dates, oldest entry first.
    pub history: Vec<String>,
}

pub(super) async fn get_remaining_vacation_days(
    server: &VacationMcpServer,
    params: Parameters<EmployeeIdParams>,
) -> Result<CallToolResult, McpError> {
    let employee_id = params.0.employee_id;

    let remaining_days = server
        .state
        .ledger
        .read()
        .await
        .remaining_days(&employee_id)
        .map_err(|error| VacationMcpServer::ledger_error(&error))?;

    let summary = format!("Employee {employee_id} has {remaining_days} vacation days remaining");
    let response = RemainingDaysResponse {
        employee_id,
        remaining_days,
    };

    Ok(VacationMcpServer::success(
        summary,
        VacationMcpServer::serialize(response, "get_remaining_vacation_days response")?,
    ))
}

pub(super) async fn log_vacation_day(
    server: &VacationMcpServer,
    params: Parameters<LogVacationDayParams>,
) -> Result<CallToolResult, McpError> {
    let LogVacationDayParams { employee_id, dates } = params.0;

    let response = {
        let mut ledger = server.state.ledger.write().await;
        let message = ledger
            .log_days(&employee_id, &dates)
            .map_err(|error| VacationMcpServer::ledger_error(&error))?;
        let remaining_days = ledger
            .remaining_days(&employee_id)
            .map_err(|error| VacationMcpServer::ledger_error(&error))?;
        drop(ledger);

        LogVacationDayResponse {
            employee_id,
            message,
            logged: dates.len(),
            remaining_days,
        }
    };

    tracing::info!(
        employee_id = %response.employee_id,
        logged = response.logged,
        "vacation days logged"
    );

    Ok(VacationMcpServer::success(
        response.message.clone(),
        VacationMcpServer::serialize(response, "log_vacation_day response")?,
    ))
}

pub(super) async fn get_vacation_history(
    server: &VacationMcpServer,
    params: Parameters<EmployeeIdParams>,
) -> Result<CallToolResult, McpError> {
    let employee_id = params.0.employee_id;

    let history = server
        .state
        .ledger
        .read()
        .await
        .history(&employee_id)
        .map_err(|error| VacationMcpServer::ledger_error(&error))?;

    let summary = format!(
        "{} vacation day(s) logged for employee {employee_id}",
        history.len()
    );
    let response = VacationHistoryResponse {
        employee_id,
        history,
    };

    Ok(VacationMcpServer::success(
        summary,
        VacationMcpServer::serialize(response, "get_vacation_history response")?,
    ))
}
