use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use fn_request_signer::{Body, Headers, SignerConfig, SigningOutcome};

/// Sign a function invocation request and print it as JSON.
///
/// The request is not sent.
#[derive(Parser)]
#[clap(name = "fn-sign", version, about, long_about = None)]
struct Args {
    #[clap(flatten)]
    config: SignerConfig,

    /// HTTP method
    #[clap(long, default_value = "POST")]
    method: String,

    /// Extra header as "Name: value"; may be repeated
    #[clap(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Request body
    #[clap(long, conflicts_with = "data_file")]
    data: Option<String>,

    /// Read the request body from a file, or from stdin with "-"
    #[clap(long)]
    data_file: Option<PathBuf>,

    /// Enable verbose logging
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    signed: bool,
    method: &'a str,
    uri: String,
    headers: &'a Headers,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected \"Name: value\", got {raw:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in {raw:?}"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("fn_request_signer=debug,fn_sign=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fn_sign=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_body(args: &Args) -> Result<Body> {
    Ok(match (&args.data, &args.data_file) {
        (Some(data), _) => Body::from(data.clone()),
        (None, Some(path)) if path.as_os_str() == "-" => Body::stream(io::stdin()),
        (None, Some(path)) => Body::from(
            fs::read(path).with_context(|| format!("reading body from {}", path.display()))?,
        ),
        (None, None) => Body::Empty,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let signer = args
        .config
        .request_signer()
        .context("loading signer configuration")?;
    info!(key_id = %signer.key_id(), "loaded signing key");

    let body = read_body(&args)?;
    let mut request = args
        .config
        .function_request(&args.method, body)
        .context("building function request")?;
    request.headers_mut().extend(args.headers.iter().cloned());

    let output = match signer.sign(request).context("signing request")? {
        SigningOutcome::Signed(signed) => serde_json::to_string_pretty(&Output {
            signed: true,
            method: signed.method(),
            uri: signed.uri().to_string(),
            headers: signed.headers(),
        }),
        SigningOutcome::Unsigned(request) => serde_json::to_string_pretty(&Output {
            signed: false,
            method: request.method(),
            uri: request.uri().to_string(),
            headers: request.headers(),
        }),
    }
    .context("serializing signed request")?;

    println!("{output}");
    Ok(())
}
