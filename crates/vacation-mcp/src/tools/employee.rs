use rmcp::{ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult};
use serde::{Deserialize, Serialize};

use crate::server::VacationMcpServer;

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeNameParams {
    /// Exact employee name, e.g. "Alice Smith". Case-sensitive.
    pub employee_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeIdResponse {
    /// The name that was looked up.
    pub employee_name: String,
    /// ID of the first employee with that name.
    pub employee_id: String,
}

pub(super) async fn get_employee_id_by_name(
    server: &VacationMcpServer,
    params: Parameters<EmployeeNameParams>,
) -> Result<CallToolResult, McpError> {
    let employee_name = params.0.employee_name;

    let employee_id = server
        .state
        .ledger
        .read()
        .await
        .lookup_id_by_name(&employee_name)
        .map(ToString::to_string)
        .map_err(|error| VacationMcpServer::ledger_error(&error))?;

    let summary = format!("{employee_name} has employee ID {employee_id}");
    let response = EmployeeIdResponse {
        employee_name,
        employee_id,
    };

    Ok(VacationMcpServer::success(
        summary,
        VacationMcpServer::serialize(response, "get_employee_id_by_name response")?,
    ))
}
