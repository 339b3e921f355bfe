// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
use anyhow::Result;
use clap::Parser;
use mare_core::{Codec, OpContext};
use mare_driver::{run_job, WorkerClient};
use mare_proto::{ResourceBackend, ResourceHint};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mare-driver", version, about = "MapReduce job driver")]
struct Args {
    /// Worker RPC endpoint, e.g. http://127.0.0.1:8080.
    #[arg(long)]
    worker_url: String,

    /// Backend tag for the input locators below.
    #[arg(long, default_value = "FILE")]
    input_resource_backend: ResourceBackend,

    /// Backend for intermediate (mapper-output) resources.
    #[arg(long, default_value = "FILE")]
    inter_back: ResourceBackend,

    /// Placement hint for intermediate resources (directory, or s3://bucket/prefix).
    #[arg(long)]
    inter_hint: String,

    /// Backend for the final output resource.
    #[arg(long, default_value = "FILE")]
    output_back: ResourceBackend,

    /// Placement hint for the final output resource.
    #[arg(long)]
    output_hint: String,

    /// Number of reducers; must be >= 1.
    #[arg(long)]
    n_reducers: usize,

    /// Wire codec shared with the worker deployment.
    #[arg(long, default_value = "tabline")]
    codec: String,

    /// Enable verbose logging.
    #[arg(long)]
    debug: bool,

    /// Input resource locators.
    inputs: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("mare=debug")
    } else {
        EnvFilter::new("mare=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let codec = match args.codec.as_str() {
        "tabline" => Codec::TabLine,
        "json" => Codec::Json,
        other => anyhow::bail!("unrecognized --codec: {other}"),
    };

    let client = WorkerClient::new(args.worker_url.trim_end_matches('/').to_string());
    let ctx = OpContext::new();

    let inter_hint = ResourceHint::new(args.inter_back, args.inter_hint.clone());
    let output_hint = ResourceHint::new(args.output_back, args.output_hint.clone());

    info!(n_inputs = args.inputs.len(), n_reducers = args.n_reducers, "starting job");

    let result = run_job(
        &client,
        &ctx,
        &args.inputs,
        args.input_resource_backend,
        &inter_hint,
        args.n_reducers,
        &output_hint,
        codec,
    )
    .await;

    match result {
        Ok(resource) => {
            println!("{} {}", resource.backend, resource.locator);
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "job failed");
            std::process::exit(1);
        }
    }
}
