mod employee;
mod vacation;

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::server::VacationMcpServer;

#[tool_router]
impl VacationMcpServer {
    #[tool(
        description = "Get the number of remaining vacation days for an employee",
        annotations(
            title = "Get Remaining Vacation Days",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_remaining_vacation_days(
        &self,
        params: Parameters<vacation::EmployeeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        vacation::get_remaining_vacation_days(self, params).await
    }

    #[tool(
        description = "Log vacation days for an employee. Ex: [\"2023-04-01\", \"2023-04-02\"]. \
                       Dates are checked against the remaining balance in order; the server \
                       instructions describe what is kept when the balance runs out",
        annotations(
            title = "Log Vacation Days",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn log_vacation_day(
        &self,
        params: Parameters<vacation::LogVacationDayParams>,
    ) -> Result<CallToolResult, McpError> {
        vacation::log_vacation_day(self, params).await
    }

    #[tool(
        description = "Retrieve the vacation history for an employee, oldest entry first",
        annotations(
            title = "Get Vacation History",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_vacation_history(
        &self,
        params: Parameters<vacation::EmployeeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        vacation::get_vacation_history(self, params).await
    }

    #[tool(
        description = "Retrieve the employee ID for an exact, case-sensitive employee name",
        annotations(
            title = "Get Employee ID By Name",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_employee_id_by_name(
        &self,
        params: Parameters<employee::EmployeeNameParams>,
    ) -> Result<CallToolResult, McpError> {
        employee::get_employee_id_by_name(self, params).await
    }
}

impl VacationMcpServer {
    pub(crate) fn build_tool_router() -> rmcp::handler::server::router::tool::ToolRouter<Self> {
        Self::tool_router()
    }
}

#[cfg(test)]
mod tests {
    use rmcp::handler::server::wrapper::Parameters;
    use serde_json::json;
    use vacation_core::{Employee, Ledger, LogPolicy};

    use super::{employee, vacation};
    use crate::{server::VacationMcpServer, state::ServerState};

    fn server() -> VacationMcpServer {
        VacationMcpServer::new(ServerState::new(Ledger::default()))
    }

    fn employee_id(id: &str) -> Parameters<vacation::EmployeeIdParams> {
        Parameters(vacation::EmployeeIdParams {
            employee_id: id.to_string(),
        })
    }

    fn log_request(id: &str, dates: &[&str]) -> Parameters<vacation::LogVacationDayParams> {
        Parameters(vacation::LogVacationDayParams {
            employee_id: id.to_string(),
            dates: dates.iter().map(ToString::to_string).collect(),
        })
    }

    #[tokio::test]
    async fn remaining_days_reports_balance() {
        let server = server();

        let result = vacation::get_remaining_vacation_days(&server, employee_id("E001"))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content.unwrap(),
            json!({ "employeeId": "E001", "remainingDays": 17 })
        );
    }

    #[tokio::test]
    async fn unknown_employee_is_not_found() {
        let server = server();

        let error = vacation::get_remaining_vacation_days(&server, employee_id("E404"))
            .await
            .unwrap_err();

        assert_eq!(error.message, "employee not found");
        assert_eq!(error.data.unwrap()["employeeId"], "E404");
    }

    #[tokio::test]
    async fn log_then_read_history() {
        let server = server();

        let result = vacation::log_vacation_day(&server, log_request("E001", &["2099-01-01"]))
            .await
            .unwrap();
        let data = result.structured_content.unwrap();
        assert_eq!(data["message"], "Logged 1 vacation days for employee E001.");
        assert_eq!(data["logged"], 1);
        assert_eq!(data["remainingDays"], 16);

        let history = vacation::get_vacation_history(&server, employee_id("E001"))
            .await
            .unwrap()
            .structured_content
            .unwrap();
        assert_eq!(
            history["history"],
            json!(["2023-01-15", "2023-02-20", "2023-03-10", "2099-01-01"])
        );
    }

    #[tokio::test]
    async fn log_past_balance_reports_recorded_prefix() {
        let server = server();
        let dates: Vec<String> = (1..=15).map(|day| format!("2099-02-{day:02}")).collect();
        let dates: Vec<&str> = dates.iter().map(String::as_str).collect();

        let error = vacation::log_vacation_day(&server, log_request("E002", &dates))
            .await
            .unwrap_err();

        let data = error.data.unwrap();
        assert_eq!(data["recorded"], 13);
        assert_eq!(data["requested"], 15);
        assert_eq!(server.state.ledger.read().await.remaining_days("E002"), Ok(0));
    }

    #[tokio::test]
    async fn all_or_nothing_ledger_records_nothing_on_failure() {
        let ledger = Ledger::new(
            vec![Employee::new("E010", "Carol Diaz", 1, Vec::new())],
            LogPolicy::AllOrNothing,
        )
        .unwrap();
        let server = VacationMcpServer::new(ServerState::new(ledger));

        let error =
            vacation::log_vacation_day(&server, log_request("E010", &["2099-01-01", "2099-01-02"]))
                .await
                .unwrap_err();

        assert_eq!(error.data.unwrap()["recorded"], 0);
        assert!(server.state.ledger.read().await.history("E010").unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_logging_never_overdraws() {
        let server = server();
        let mut tasks = tokio::task::JoinSet::new();

        for day in 1..=20 {
            let server = server.clone();
            tasks.spawn(async move {
                let date = format!("2099-03-{day:02}");
                vacation::log_vacation_day(&server, log_request("E002", &[date.as_str()]))
                    .await
                    .is_ok()
            });
        }

        let mut succeeded = 0;
        while let Some(outcome) = tasks.join_next().await {
            if outcome.unwrap() {
                succeeded += 1;
            }
        }

        assert_eq!(succeeded, 13);
        let ledger = server.state.ledger.read().await;
        assert_eq!(ledger.remaining_days("E002"), Ok(0));
        assert_eq!(ledger.history("E002").unwrap().len(), 15);
    }

    #[tokio::test]
    async fn employee_id_by_name() {
        let server = server();

        let result = employee::get_employee_id_by_name(
            &server,
            Parameters(employee::EmployeeNameParams {
                employee_name: "Bob Johnson".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(result.structured_content.unwrap()["employeeId"], "E002");

        let error = employee::get_employee_id_by_name(
            &server,
            Parameters(employee::EmployeeNameParams {
                employee_name: "bob johnson".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(error.message, "no employee with that name");
    }

    #[test]
    fn params_use_camel_case() {
        let params: vacation::LogVacationDayParams =
            serde_json::from_value(json!({ "employeeId": "E001", "dates": ["2099-01-01"] }))
                .unwrap();

        assert_eq!(params.employee_id, "E001");
        assert_eq!(params.dates, ["2099-01-01"]);
    }
}
