use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::endoflife::EolClient;
use crate::error::EolError;
use crate::format::{format_cycle, format_cycles, format_products};

/// Outcome of one tool invocation. Handled failures come back as ordinary
/// text with the error flag set; only an unknown tool name is allowed to
/// escape `call_tool` as a hard error.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutcome {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutcome {
    fn success(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub fn call_tool<C: EolClient>(
    client: &C,
    name: &str,
    args: &Map<String, Value>,
) -> Result<ToolOutcome, EolError> {
    match name {
        "list_available_products" => Ok(list_available_products(client)),
        "get_product_cycles" => Ok(get_product_cycles(client, args)),
        "get_cycle_details" => Ok(get_cycle_details(client, args)),
        other => Err(EolError::UnsupportedTool(other.to_string())),
    }
}

fn require_string<'a>(args: &'a Map<String, Value>, name: &str) -> Result<&'a str, EolError> {
    match args.get(name).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(EolError::MissingArgument(name.to_string())),
    }
}

fn list_available_products<C: EolClient>(client: &C) -> ToolOutcome {
    match client.fetch_all_products() {
        Ok(products) => ToolOutcome::success(format_products(&products)),
        Err(err) => ToolOutcome::failure(err.to_string()),
    }
}

fn get_product_cycles<C: EolClient>(client: &C, args: &Map<String, Value>) -> ToolOutcome {
    let product = match require_string(args, "product_name") {
        Ok(product) => product,
        Err(err) => return ToolOutcome::failure(err.to_string()),
    };
    match client.fetch_cycles(product) {
        Ok(cycles) => ToolOutcome::success(format_cycles(product, &cycles)),
        Err(err) => {
            tracing::warn!(product, error = %err, "product cycle lookup failed");
            ToolOutcome::failure("Failed to get product cycles")
        }
    }
}

fn get_cycle_details<C: EolClient>(client: &C, args: &Map<String, Value>) -> ToolOutcome {
    let product = match require_string(args, "product_name") {
        Ok(product) => product,
        Err(err) => return ToolOutcome::failure(err.to_string()),
    };
    let cycle = match require_string(args, "cycle_name") {
        Ok(cycle) => cycle,
        Err(err) => return ToolOutcome::failure(err.to_string()),
    };
    match client.fetch_cycle(product, cycle) {
        Ok(details) => ToolOutcome::success(format_cycle(product, &details)),
        Err(err) => {
            tracing::warn!(product, cycle, error = %err, "cycle detail lookup failed");
            ToolOutcome::failure("Failed to get cycle details")
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescription {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Discovery metadata for the three tools: names, human descriptions and
/// JSON-schema argument declarations. Carries no behavior.
pub fn tool_descriptions() -> Vec<ToolDescription> {
    vec![
        ToolDescription {
            name: "list_available_products",
            description: "Lists all software, operating systems, and devices tracked by endoflife.date. Use this to discover available products before checking specific EOL information.",
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDescription {
            name: "get_product_cycles",
            description: "Retrieves all release cycles for a specific product with their end-of-life dates. Use this to check EOL status for products like operating systems, programming languages, or software.",
            input_schema: json!({
                "type": "object",
                "required": ["product_name"],
                "properties": {
                    "product_name": {
                        "type": "string",
                        "description": "Name of one of the available products, e.g., 'ubuntu', 'php', 'windows'"
                    }
                }
            }),
        },
        ToolDescription {
            name: "get_cycle_details",
            description: "Retrieves detailed EOL information about a specific release cycle of a product. Use this to get support dates, LTS status, and latest release information for a particular version.",
            input_schema: json!({
                "type": "object",
                "required": ["product_name", "cycle_name"],
                "properties": {
                    "product_name": {
                        "type": "string",
                        "description": "Name of one of the available products, e.g., 'ubuntu', 'php', 'windows'"
                    },
                    "cycle_name": {
                        "type": "string",
                        "description": "Version or release cycle identifier, e.g., '22.04', '8.1', '11'"
                    }
                }
            }),
        },
    ]
}
