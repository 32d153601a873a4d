//! Read-only informational resources.
//!
//! `health://` always reads as `OK`. `greet/{employee_id}` reads as a greeting
//! for an existing employee.

use rmcp::{
    ErrorData as McpError,
    model::{
        AnnotateAble, ListResourceTemplatesResult, ListResourcesResult, RawResource,
        RawResourceTemplate, ReadResourceResult, ResourceContents,
    },
};
use serde_json::json;
use vacation_core::Ledger;

use crate::server::VacationMcpServer;

pub const HEALTH_URI: &str = "health://";
pub const GREET_TEMPLATE: &str = "greet/{employee_id}";
const GREET_PREFIX: &str = "greet/";

pub fn list() -> ListResourcesResult {
    let mut health = RawResource::new(HEALTH_URI, "health");
    health.description = Some("Health check for the vacation server".to_string());
    health.mime_type = Some("text/plain".to_string());

    ListResourcesResult::with_all_items(vec![health.no_annotation()])
}

pub fn templates() -> Result<ListResourceTemplatesResult, McpError> {
    let greet: RawResourceTemplate = serde_json::from_value(json!({
        "uriTemplate": GREET_TEMPLATE,
        "name": "greet_employee",
        "description": "Greeting for an existing employee",
        "mimeType": "text/plain",
    }))
    .map_err(|error| {
        McpError::internal_error(
            "failed to build resource template",
            Some(json!({ "uriTemplate": GREET_TEMPLATE, "reason": error.to_string() })),
        )
    })?;

    Ok(ListResourceTemplatesResult::with_all_items(vec![
        greet.no_annotation(),
    ]))
}

pub async fn read(server: &VacationMcpServer, uri: &str) -> Result<ReadResourceResult, McpError> {
    let text = if uri == HEALTH_URI {
        Ledger::health_check().to_string()
    } else if let Some(employee_id) = uri.strip_prefix(GREET_PREFIX) {
        server
            .state
            .ledger
            .read()
            .await
            .greet(employee_id)
            .map_err(|error| VacationMcpServer::ledger_error(&error))?
    } else {
        return Err(McpError::resource_not_found(
            "resource not found",
            Some(json!({ "uri": uri })),
        ));
    };

    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(text, uri)],
    })
}
