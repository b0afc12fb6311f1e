// # api_tour
//
// One subcommand per raw Hover API call. Nothing runs unless asked for:
//
// ```bash
// api_tour -c hover.toml domains
// api_tour -c hover.toml domain-dns dom123456
// api_tour -c hover.toml create-mx dom123456 mysubdomain "10 mail"
// api_tour -c hover.toml update dns1234567 127.0.0.1
// ```
//
// Domain ids (`dom...`) come from `domains` or `dns`; record ids (`dns...`)
// come from `dns` or `domain-dns`.

use clap::{Parser, Subcommand};
use hover_core::{HoverClient, NewRecord};
use hover_tools::logging::init_logging;
use hover_tools::{CommonArgs, ToolExitCode};
use reqwest::Method;
use serde_json::{Value, json};
use std::process::ExitCode;

/// Walk through the Hover API one call at a time.
#[derive(Debug, Parser)]
#[command(name = "api_tour", version)]
struct Tour {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    step: Step,
}

#[derive(Clone, Debug, Subcommand)]
enum Step {
    /// Details of all domains without DNS records
    Domains,

    /// All domains and their DNS records
    Dns,

    /// Details of one domain without DNS records
    Domain { domain_id: String },

    /// DNS records of one domain
    DomainDns { domain_id: String },

    /// Create an A record
    CreateA {
        domain_id: String,
        name: String,
        address: String,
    },

    /// Create an SRV record; content is "{priority} {weight} {port} {target}"
    CreateSrv {
        domain_id: String,
        name: String,
        content: String,
    },

    /// Create an MX record; content is "{priority} {host}"
    CreateMx {
        domain_id: String,
        name: String,
        content: String,
    },

    /// Replace the content of a record
    Update { record_id: String, content: String },

    /// Delete a record
    Delete { record_id: String },
}

async fn list_domains(client: &HoverClient) -> hover_core::Result<Option<Value>> {
    client.call(Method::GET, "domains", None).await
}

async fn list_dns(client: &HoverClient) -> hover_core::Result<Option<Value>> {
    client.call(Method::GET, "dns", None).await
}

async fn domain_detail(client: &HoverClient, domain_id: &str) -> hover_core::Result<Option<Value>> {
    client
        .call(Method::GET, &format!("domains/{}", domain_id), None)
        .await
}

async fn domain_dns(client: &HoverClient, domain_id: &str) -> hover_core::Result<Option<Value>> {
    client
        .call(Method::GET, &format!("domains/{}/dns", domain_id), None)
        .await
}

async fn create(
    client: &HoverClient,
    domain_id: &str,
    record: NewRecord,
) -> hover_core::Result<Option<Value>> {
    client.create_record(domain_id, &record).await
}

async fn update(
    client: &HoverClient,
    record_id: &str,
    content: &str,
) -> hover_core::Result<Option<Value>> {
    client
        .update_record(record_id, &json!({ "content": content }))
        .await
}

async fn delete(client: &HoverClient, record_id: &str) -> hover_core::Result<Option<Value>> {
    client.delete_record(record_id).await
}

async fn run(tour: Tour) -> anyhow::Result<()> {
    let config = tour.common.load_config(tour.common.cli_layer())?;
    let client = HoverClient::authenticate(&config.client, &config.credentials).await?;

    let body = match tour.step {
        Step::Domains => list_domains(&client).await?,
        Step::Dns => list_dns(&client).await?,
        Step::Domain { domain_id } => domain_detail(&client, &domain_id).await?,
        Step::DomainDns { domain_id } => domain_dns(&client, &domain_id).await?,
        Step::CreateA {
            domain_id,
            name,
            address,
        } => create(&client, &domain_id, NewRecord::new(name, "A", address)).await?,
        Step::CreateSrv {
            domain_id,
            name,
            content,
        } => create(&client, &domain_id, NewRecord::new(name, "SRV", content)).await?,
        Step::CreateMx {
            domain_id,
            name,
            content,
        } => create(&client, &domain_id, NewRecord::new(name, "MX", content)).await?,
        Step::Update { record_id, content } => update(&client, &record_id, &content).await?,
        Step::Delete { record_id } => delete(&client, &record_id).await?,
    };

    match body {
        Some(body) => println!("{}", serde_json::to_string_pretty(&body)?),
        None => println!("(empty response)"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let tour = Tour::parse();

    if let Err(e) = init_logging(tour.common.log_level) {
        eprintln!("{}", e);
        return ToolExitCode::Unexpected.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            return ToolExitCode::Unexpected.into();
        }
    };

    match rt.block_on(run(tour)) {
        Ok(()) => ToolExitCode::Success.into(),
        Err(e) => {
            eprintln!("{:#}", e);
            ToolExitCode::for_error(&e).into()
        }
    }
}
