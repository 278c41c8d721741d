use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use eol_mcp::endoflife::EolHttpClient;
use eol_mcp::error::EolError;
use eol_mcp::tools::{ToolOutcome, call_tool, tool_descriptions};

#[derive(Parser)]
#[command(name = "eol-mcp")]
#[command(about = "Look up end-of-life dates for software and devices via endoflife.date")]
#[command(version, author)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List every product tracked by endoflife.date")]
    Products,
    #[command(about = "Show all release cycles of a product")]
    Cycles { product_name: String },
    #[command(about = "Show details for one release cycle of a product")]
    Cycle {
        product_name: String,
        cycle_name: String,
    },
    #[command(about = "Print the tool descriptions as JSON")]
    Tools,
    #[command(about = "Invoke a tool by name with key=value arguments")]
    Call {
        name: String,
        #[arg(long = "arg", value_parser = parse_key_val)]
        args: Vec<(String, String)>,
    },
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    Ok((key.to_string(), value.to_string()))
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(eol) = report.downcast_ref::<EolError>() {
            return ExitCode::from(map_exit_code(eol));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &EolError) -> u8 {
    match error {
        EolError::UnsupportedTool(_) => 2,
        EolError::EndoflifeHttp(_) | EolError::EndoflifeStatus { .. } | EolError::Decode(_) => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (name, args) = match cli.command {
        Commands::Tools => {
            let rendered = serde_json::to_string_pretty(&tool_descriptions()).into_diagnostic()?;
            println!("{rendered}");
            return Ok(());
        }
        Commands::Products => ("list_available_products".to_string(), Map::new()),
        Commands::Cycles { product_name } => (
            "get_product_cycles".to_string(),
            Map::from_iter([("product_name".to_string(), Value::String(product_name))]),
        ),
        Commands::Cycle {
            product_name,
            cycle_name,
        } => (
            "get_cycle_details".to_string(),
            Map::from_iter([
                ("product_name".to_string(), Value::String(product_name)),
                ("cycle_name".to_string(), Value::String(cycle_name)),
            ]),
        ),
        Commands::Call { name, args } => (
            name,
            args.into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect(),
        ),
    };

    let client = EolHttpClient::new().into_diagnostic()?;
    let outcome = call_tool(&client, &name, &args).into_diagnostic()?;
    print_outcome(outcome)
}

fn print_outcome(outcome: ToolOutcome) -> miette::Result<()> {
    if outcome.is_error {
        return Err(miette::Report::msg(outcome.text));
    }
    println!("{}", outcome.text);
    Ok(())
}
