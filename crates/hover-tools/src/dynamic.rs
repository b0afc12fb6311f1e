//! `dynhover`: point one A record at this machine's public IP

use crate::args::{CommonArgs, parse_ip_version};
use clap::Parser;
use hover_core::{ConfigLayer, DnsRecord, Error, HoverClient, IpVersion, RecordService};
use hover_ip_http::HttpIpSource;
use std::io::Write;

/// Update a hover.com DNS record with the current IP of this machine.
#[derive(Debug, Clone, Parser)]
#[command(name = "dynhover", version)]
pub struct DynArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Service answering with the caller's public IP as plain text
    #[arg(long, env = "HOVER_IP_URL", value_name = "URL")]
    pub ip_url: Option<String>,

    /// Address family to accept from the IP service
    #[arg(long, default_value = "v4", value_parser = parse_ip_version)]
    pub ip_version: IpVersion,

    /// Name of the A record to update (falls back to `domain` in the conf file)
    pub fqdn: Option<String>,
}

impl DynArgs {
    fn cli_layer(&self) -> ConfigLayer {
        ConfigLayer {
            domain: self.fqdn.clone(),
            ip_url: self.ip_url.clone(),
            ..self.common.cli_layer()
        }
    }
}

/// Run one dynamic update
pub async fn run(args: &DynArgs, out: &mut impl Write) -> anyhow::Result<DnsRecord> {
    let config = args.common.load_config(args.cli_layer())?;
    let fqdn = config
        .domain
        .clone()
        .ok_or_else(|| Error::config("You must specify a domain"))?;

    let client = HoverClient::authenticate(&config.client, &config.credentials).await?;
    let (service, _events) = RecordService::new(client);
    let ip_source = HttpIpSource::new(config.ip_url.clone(), Some(args.ip_version));

    let record = service.update_dynamic_record(&fqdn, &ip_source).await?;
    writeln!(out, "Updated {} to {}", fqdn, record.content)?;

    Ok(record)
}
