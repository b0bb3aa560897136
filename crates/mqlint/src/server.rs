//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the diagnostics engine over stdio so editors and assistants can
//! check MQL documents as they change. Results are kept in a
//! [`DiagnosticStore`]: every check carries the revision of the text it
//! was run on, and a result for an older revision never replaces a newer
//! one.
//!
//! # Tools
//!
//! - `check_document` runs the checkers and publishes the result
//! - `get_diagnostics` returns what is published for a document
//! - `clear_diagnostics` forgets one document or all of them
//! - `get_info` reports the package and effective settings

use std::sync::Arc;

use camino::Utf8Path;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use mqlint_core::config::Config;
use mqlint_core::engine::{self, CheckReport, RunConfiguration};
use mqlint_core::error::LintResult;
use mqlint_core::store::{DiagnosticStore, PublishOutcome};
use mqlint_core::{Dialect, Published};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `check_document` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckDocumentParams {
    /// Document URI or path; its extension selects the dialect.
    pub uri: String,
    /// Full text of the document.
    pub text: String,
    /// Force a dialect: "mql4" or "mql5".
    pub dialect: Option<Dialect>,
    /// Revision of `text`. Defaults to one past the published revision.
    pub revision: Option<u64>,
    /// Override the configured diagnostic cap.
    pub max_problems: Option<usize>,
}

/// Parameters for the `get_diagnostics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetDiagnosticsParams {
    /// Document URI or path used when checking.
    pub uri: String,
}

/// Parameters for the `clear_diagnostics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClearDiagnosticsParams {
    /// Document to forget. Omit to forget every document.
    pub uri: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckDocumentResponse {
    uri: String,
    revision: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    publish: Option<PublishOutcome>,
    report: CheckReport,
}

#[derive(Debug, Serialize)]
struct GetDiagnosticsResponse {
    uri: String,
    published: Option<Published>,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

/// MCP server publishing MQL diagnostics.
#[derive(Clone)]
pub struct DiagnosticsServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    store: Arc<DiagnosticStore>,
    config: Arc<Config>,
    run: RunConfiguration,
}

#[tool_router]
impl DiagnosticsServer {
    /// Create a server for the loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails when the configuration disables an unknown diagnostic code.
    pub fn new(config: Config) -> LintResult<Self> {
        let run = config.run_configuration()?;
        Ok(Self {
            tool_router: Self::tool_router(),
            store: Arc::new(DiagnosticStore::new()),
            config: Arc::new(config),
            run,
        })
    }

    /// The store results are published to.
    pub fn store(&self) -> &DiagnosticStore {
        &self.store
    }

    /// Get project information.
    #[tool(description = "Get mqlint name, version, and effective settings")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "validation_enabled": self.config.validation_enabled,
            "max_problems": self.run.max_problems,
            "documents": self.store.len(),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}\nvalidation: {}, max problems: {}, documents: {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
                if self.config.validation_enabled { "on" } else { "off" },
                self.run.max_problems,
                self.store.len(),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Check a document and publish its diagnostics.
    #[tool(
        description = "Check MQL4/MQL5 source text and publish its diagnostics. Returns the report and whether the publish replaced the stored result (results for older revisions are discarded)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", uri = %params.uri))]
    fn check_document(
        &self,
        Parameters(params): Parameters<CheckDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_document", revision = ?params.revision, "executing MCP tool");

        if let Some(max) = self.config.input_limit()
            && params.text.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    params.text.len()
                ),
                None,
            ));
        }

        // Allocated before checking so an overlapping call for the same
        // document gets a later revision.
        let revision = params
            .revision
            .unwrap_or_else(|| self.store.next_revision(&params.uri));
        let dialect = params
            .dialect
            .unwrap_or_else(|| self.config.resolve_dialect(Some(Utf8Path::new(&params.uri))));

        let mut run = self.run.clone();
        if let Some(max_problems) = params.max_problems {
            run = run.with_max_problems(max_problems);
        }

        if !self.config.validation_enabled {
            self.store.clear();
            tracing::info!(tool = "check_document", "validation disabled; store cleared");
            let report = engine::check_document("", dialect, &run).with_file(params.uri.clone());
            let response = CheckDocumentResponse {
                uri: params.uri,
                revision,
                publish: None,
                report,
            };
            return Ok(CallToolResult::success(vec![Content::text(to_json(&response)?)]));
        }

        let report = engine::check_document(&params.text, dialect, &run).with_file(params.uri.clone());
        let publish = self
            .store
            .publish(params.uri.clone(), revision, report.diagnostics.clone());

        tracing::info!(
            tool = "check_document",
            revision,
            applied = publish.is_applied(),
            diagnostics = report.diagnostics.len(),
            "MCP tool completed"
        );
        let response = CheckDocumentResponse {
            uri: params.uri,
            revision,
            publish: Some(publish),
            report,
        };
        Ok(CallToolResult::success(vec![Content::text(to_json(&response)?)]))
    }

    /// Read the published diagnostics for a document.
    #[tool(description = "Get the diagnostics currently published for a document URI.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", uri = %params.uri))]
    fn get_diagnostics(
        &self,
        Parameters(params): Parameters<GetDiagnosticsParams>,
    ) -> Result<CallToolResult, McpError> {
        let published = self.store.get(&params.uri);
        tracing::debug!(tool = "get_diagnostics", found = published.is_some(), "executing MCP tool");
        let response = GetDiagnosticsResponse {
            uri: params.uri,
            published,
        };
        Ok(CallToolResult::success(vec![Content::text(to_json(&response)?)]))
    }

    /// Forget published diagnostics.
    #[tool(description = "Clear published diagnostics for one document URI, or for all documents when no URI is given.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn clear_diagnostics(
        &self,
        Parameters(params): Parameters<ClearDiagnosticsParams>,
    ) -> Result<CallToolResult, McpError> {
        let cleared = match params.uri {
            Some(ref uri) => usize::from(self.store.remove(uri).is_some()),
            None => {
                let count = self.store.len();
                self.store.clear();
                count
            }
        };
        tracing::info!(tool = "clear_diagnostics", cleared, "MCP tool completed");
        let json = to_json(&serde_json::json!({ "cleared": cleared }))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for DiagnosticsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Send document text to check_document after every edit, with an increasing revision.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn server() -> DiagnosticsServer {
        DiagnosticsServer::new(Config::default()).unwrap()
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("output should be valid JSON")
    }

    fn check(
        server: &DiagnosticsServer,
        uri: &str,
        text: &str,
        revision: Option<u64>,
    ) -> serde_json::Value {
        let params = Parameters(CheckDocumentParams {
            uri: uri.to_string(),
            text: text.to_string(),
            dialect: None,
            revision,
            max_problems: None,
        });
        json_of(&server.check_document(params).expect("check_document should succeed"))
    }

    #[test]
    fn server_info_has_correct_name() {
        let server = server();
        let info = ServerHandler::get_info(&server);
        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn unknown_disabled_code_is_rejected() {
        let config = Config {
            disabled_codes: Some(vec!["bogus".into()]),
            ..Config::default()
        };
        assert!(DiagnosticsServer::new(config).is_err());
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });
        let result = server().get_info(params).expect("get_info should succeed");
        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["max_problems"], 100);
    }

    #[test]
    fn check_document_publishes() {
        let server = server();
        let json = check(&server, "file:///Experts/a.mq5", "int x = 5", Some(1));
        assert_eq!(json["publish"]["outcome"], "applied");
        assert_eq!(json["report"]["dialect"], "mql5");
        assert_eq!(json["report"]["diagnostics"][0]["code"], "missing-semicolon");

        let published = server.store().get("file:///Experts/a.mq5").unwrap();
        assert_eq!(published.revision, 1);
        assert!(!published.diagnostics.is_empty());
    }

    #[test]
    fn stale_revision_is_not_published() {
        let server = server();
        check(&server, "a.mq4", "int x = 5;\nPrint(x);", Some(4));
        let json = check(&server, "a.mq4", "int x = 5", Some(3));
        assert_eq!(json["publish"]["outcome"], "stale");
        assert_eq!(json["publish"]["current"], 4);
        assert!(server.store().get("a.mq4").unwrap().diagnostics.is_empty());
    }

    #[test]
    fn revision_defaults_to_next() {
        let server = server();
        assert_eq!(check(&server, "a.mq5", "", None)["revision"], 1);
        assert_eq!(check(&server, "a.mq5", "", None)["revision"], 2);
    }

    #[test]
    fn default_revision_follows_explicit_revisions() {
        let server = server();
        check(&server, "a.mq5", "int x = 5", Some(7));
        let json = check(&server, "a.mq5", "int x = 5;\nPrint(x);", None);
        assert_eq!(json["revision"], 8);
        assert_eq!(json["publish"]["outcome"], "applied");
    }

    #[test]
    fn overlapping_default_revisions_keep_the_newer_text() {
        let server = server();
        check(&server, "a.mq5", "", None);

        // A check of the older text took its revision first but publishes last.
        let older = server.store().next_revision("a.mq5");
        let json = check(&server, "a.mq5", "int x = 5;\nPrint(x);", None);
        assert_eq!(json["revision"], older + 1);

        let stale = server.store().publish("a.mq5", older, Vec::new());
        assert_eq!(stale, PublishOutcome::Stale { current: older + 1 });
        assert_eq!(server.store().revision("a.mq5"), Some(older + 1));
    }

    #[test]
    fn disabled_validation_clears_the_store() {
        let config = Config {
            validation_enabled: false,
            ..Config::default()
        };
        let server = DiagnosticsServer::new(config).unwrap();
        server.store().publish("b.mq5", 1, Vec::new());
        let json = check(&server, "a.mq5", "int x = 5", Some(1));
        assert_eq!(json["report"]["diagnostics"].as_array().unwrap().len(), 0);
        assert!(json["publish"].is_null());
        assert!(server.store().is_empty());
    }

    #[test]
    fn oversized_input_is_rejected() {
        let config = Config {
            max_input_bytes: Some(4),
            ..Config::default()
        };
        let server = DiagnosticsServer::new(config).unwrap();
        let params = Parameters(CheckDocumentParams {
            uri: "a.mq5".into(),
            text: "int x = 5;".into(),
            dialect: None,
            revision: None,
            max_problems: None,
        });
        assert!(server.check_document(params).is_err());
    }

    #[test]
    fn get_and_clear_diagnostics() {
        let server = server();
        check(&server, "a.mq5", "int x = 5", Some(1));
        check(&server, "b.mq5", "int y = 5", Some(1));

        let got = server
            .get_diagnostics(Parameters(GetDiagnosticsParams { uri: "a.mq5".into() }))
            .unwrap();
        assert_eq!(json_of(&got)["published"]["revision"], 1);

        let cleared = server
            .clear_diagnostics(Parameters(ClearDiagnosticsParams {
                uri: Some("a.mq5".into()),
            }))
            .unwrap();
        assert_eq!(json_of(&cleared)["cleared"], 1);

        let missing = server
            .get_diagnostics(Parameters(GetDiagnosticsParams { uri: "a.mq5".into() }))
            .unwrap();
        assert!(json_of(&missing)["published"].is_null());

        let all = server
            .clear_diagnostics(Parameters(ClearDiagnosticsParams { uri: None }))
            .unwrap();
        assert_eq!(json_of(&all)["cleared"], 1);
        assert!(server.store().is_empty());
    }
}
