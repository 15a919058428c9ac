//! Metra Server
//!
//! Line-oriented JSON-RPC 2.0 service on stdin/stdout: one request per line,
//! one response per line. Notifications (requests without an id) get no
//! response.
//!
//! Methods:
//! - ping
//! - units: descriptors of all units, or of one family
//! - describe: descriptor of one unit
//! - relations: declared derived-unit relations
//! - convert: `{value, from, to}`
//! - multiply / divide: `{lhs: {value, unit}, rhs: {value, unit}}`
//! - format: `{value, unit, template?, precision?}`
//! - set_factor: `{unit, factor}`, for the rest of the session
//! - check: registry and configuration validation
//!
//! Environment:
//! - `METRA_CONFIG`: path of a JSON conversion context (rates, formats)
//! - `RUST_LOG`: log filter, default `info`; logs go to stderr

mod handlers;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use metra_units::{ConversionContext, UnitError, UnitRegistry};
use handlers::{RpcRequest, RpcResponse, Session};

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Conversion context from `METRA_CONFIG`, or defaults
fn load_context(registry: &UnitRegistry) -> Result<ConversionContext, UnitError> {
    let Some(path) = env::var_os("METRA_CONFIG").map(PathBuf::from) else {
        info!("METRA_CONFIG not set, using default factors");
        return Ok(ConversionContext::default());
    };

    let mut ctx = ConversionContext::from_path(&path)?;
    ctx.resolve(registry)?;
    info!(path = %path.display(), "configuration loaded");
    for (unit, factor) in ctx.factors() {
        debug!(unit, factor, "configured factor");
    }
    Ok(ctx)
}

fn write_response(response: &RpcResponse) -> io::Result<()> {
    let json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}

fn main() -> ExitCode {
    init_logging();

    let registry = match UnitRegistry::standard() {
        Ok(registry) => registry,
        Err(err) => {
            error!(%err, "unit catalogue is inconsistent");
            return ExitCode::FAILURE;
        }
    };
    let ctx = match load_context(&registry) {
        Ok(ctx) => ctx,
        Err(err) => {
            error!(%err, code = err.code(), "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    info!(
        version = SERVER_VERSION,
        units = registry.len(),
        relations = registry.relations().len(),
        "Metra server ready, waiting for requests"
    );
    let mut session = Session::new(registry, ctx);

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "received");

                let request: RpcRequest = match serde_json::from_str(line) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!(%e, "error parsing request");
                        let response = RpcResponse::parse_error(format!("Parse error: {}", e));
                        if let Err(e) = write_response(&response) {
                            error!(%e, "error writing response");
                            break;
                        }
                        continue;
                    }
                };

                debug!(method = request.method.as_str(), "processing");
                let response = session.handle(&request);

                // Notifications (no id) get no response
                if request.id.is_none() {
                    debug!(method = request.method.as_str(), "notification processed");
                    continue;
                }

                if let Err(e) = write_response(&response) {
                    error!(%e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                error!(%e, "error reading input");
                break;
            }
        }
    }

    info!("server shutting down");
    ExitCode::SUCCESS
}
