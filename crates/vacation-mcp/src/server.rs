//! MCP server implementation exposing the vacation ledger.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{
        CallToolResult, Content, Implementation, ListResourceTemplatesResult,
        ListResourcesResult, PaginatedRequestParam, ReadResourceRequestParam, ReadResourceResult,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool_handler,
};
use serde::Serialize;
use serde_json::{Value, json};
use vacation_core::{LedgerError, LogPolicy};

use crate::{resources, state::ServerState};

/// MCP server backed by an in-memory vacation ledger.
#[derive(Clone)]
pub struct VacationMcpServer {
    /// Shared ledger state.
    pub(crate) state: ServerState,
    /// Generated router containing all exposed tools.
    pub(crate) tool_router: ToolRouter<Self>,
}

impl VacationMcpServer {
    /// Create a new server with the provided state.
    #[must_use]
    pub fn new(state: ServerState) -> Self {
        Self {
            state,
            tool_router: Self::build_tool_router(),
        }
    }

    pub(crate) fn serialize<T: Serialize>(value: T, context: &str) -> Result<Value, McpError> {
        serde_json::to_value(value).map_err(|error| {
            McpError::internal_error(
                "failed to serialize response",
                Some(json!({ "context": context, "reason": error.to_string() })),
            )
        })
    }

    pub(crate) fn success(summary: impl Into<String>, data: Value) -> CallToolResult {
        CallToolResult {
            content: vec![Content::text(summary.into())],
            structured_content: Some(data),
            is_error: Some(false),
            meta: None,
        }
    }

    pub(crate) fn ledger_error(error: &LedgerError) -> McpError {
        let reason = error.to_string();
        match error {
            LedgerError::InvalidEmployeeId(employee_id) => McpError::resource_not_found(
                "employee not found",
                Some(json!({ "employeeId": employee_id, "reason": reason })),
            ),
            LedgerError::InvalidEmployeeName(employee_name) => McpError::resource_not_found(
                "no employee with that name",
                Some(json!({ "employeeName": employee_name, "reason": reason })),
            ),
            LedgerError::InsufficientVacationDays {
                employee_id,
                requested,
                recorded,
            } => McpError::invalid_params(
                "insufficient vacation days",
                Some(json!({
                    "employeeId": employee_id,
                    "requested": requested,
                    "recorded": recorded,
                    "reason": reason,
                })),
            ),
        }
    }
}

#[tool_handler]
impl ServerHandler for VacationMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            instructions: Some(instructions(self.state.policy)),
            ..ServerInfo::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(resources::list())
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        resources::read(self, &request.uri).await
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        resources::templates()
    }
}

fn instructions(policy: LogPolicy) -> String {
    let shortfall = match policy {
        LogPolicy::Partial => {
            "log_vacation_day records dates one at a time and may record some of them before \
             failing when the balance runs out; check get_vacation_history afterwards."
        }
        LogPolicy::AllOrNothing => {
            "log_vacation_day rejects a request that does not fit in the remaining balance and \
             records none of its dates."
        }
    };

    format!(
        "Use get_employee_id_by_name to resolve a name, then get_remaining_vacation_days, \
         get_vacation_history or log_vacation_day with the returned ID. {shortfall}"
    )
}
