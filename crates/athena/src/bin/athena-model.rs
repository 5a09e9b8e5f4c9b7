//! athena-model: inspect the Athena schema and check request documents
//! offline.
//!
//! ```text
//! athena-model shapes --role request
//! athena-model describe StartQueryExecutionRequest
//! athena-model enum EncryptionOption SSE_KMS
//! athena-model validate StartQueryExecution request.json --defaults
//! ```

use std::io::Read;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use schemata_athena::schema::SHAPES;
use schemata_athena::{apply_defaults, find_enum, find_operation, find_shape, AthenaConfig};
use schemata_core::{codec, config::load_dotenv, ShapeRole};

// ── CLI ─────────────────────────────────────────────────────────────

/// Inspect Athena shapes and validate request documents.
#[derive(Parser, Debug)]
#[command(name = "athena-model", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every known shape.
    Shapes {
        /// Only shapes with this role.
        #[arg(long, value_enum)]
        role: Option<RoleFilter>,
    },

    /// Print the fields of one shape.
    Describe { shape: String },

    /// Check a value against an enum.
    Enum { name: String, value: String },

    /// Decode and validate a request document for an operation.
    Validate {
        operation: String,
        /// JSON file, or `-` for stdin.
        input: String,
        /// Fill unset fields from ATHENA_* configuration first.
        #[arg(long)]
        defaults: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RoleFilter {
    Request,
    Result,
    Structure,
    Error,
}

impl RoleFilter {
    fn matches(self, role: &ShapeRole) -> bool {
        matches!(
            (self, role),
            (RoleFilter::Request, ShapeRole::Request { .. })
                | (RoleFilter::Result, ShapeRole::Result { .. })
                | (RoleFilter::Structure, ShapeRole::Structure)
                | (RoleFilter::Error, ShapeRole::Error)
        )
    }
}

// ── Commands ────────────────────────────────────────────────────────

fn list_shapes(role: Option<RoleFilter>) {
    for shape in SHAPES.iter().filter(|s| role.map_or(true, |r| r.matches(&s.role))) {
        println!("{:<40} {}", shape.name, shape.role);
    }
}

fn describe(name: &str) -> anyhow::Result<()> {
    let shape = find_shape(name).ok_or_else(|| anyhow!("unknown shape {name}"))?;
    println!("{} ({})", shape.name, shape.role);
    for fd in shape.fields {
        let mut flags = Vec::new();
        if fd.required {
            flags.push("required".to_string());
        }
        if fd.idempotency_token {
            flags.push("idempotency token".to_string());
        }
        if !fd.constraints.is_empty() {
            flags.push(fd.constraints.to_string());
        }
        println!("  {:<36} {:<36} {}", fd.name, fd.kind.to_string(), flags.join("; "));
    }
    Ok(())
}

fn check_enum(name: &str, value: &str) -> anyhow::Result<()> {
    let descriptor = find_enum(name).ok_or_else(|| anyhow!("unknown enum {name}"))?;
    let canonical = descriptor
        .from_value(Some(value))
        .with_context(|| format!("{name} accepts {}", descriptor.values.join(", ")))?;
    println!("{canonical}");
    Ok(())
}

fn validate(operation: &str, input: &str, defaults: bool) -> anyhow::Result<()> {
    let op = find_operation(operation).ok_or_else(|| anyhow!("unknown operation {operation}"))?;

    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };

    let mut request = codec::from_str(op.input, &text)
        .with_context(|| format!("decoding {}", op.input.name))?;
    debug!(fields = request.present().count(), "Decoded request");

    if defaults {
        let config = AthenaConfig::from_env();
        info!(workgroup = %config.workgroup, database = %config.database, "Applying defaults");
        request = apply_defaults(&config, request)?;
    }

    if let Err(e) = request.validate() {
        bail!("{} is invalid: {e}", op.input.name);
    }

    println!("{request}");
    println!("{}", serde_json::to_string_pretty(&codec::to_value(&request)?)?);
    Ok(())
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    load_dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Shapes { role } => list_shapes(role),
        Command::Describe { shape } => describe(&shape)?,
        Command::Enum { name, value } => check_enum(&name, &value)?,
        Command::Validate {
            operation,
            input,
            defaults,
        } => validate(&operation, &input, defaults)?,
    }

    Ok(())
}
