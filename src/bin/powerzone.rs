use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use powerzone::{
    PdnsConfig, PowerDnsClient, SoaParams, SrvParams, ZoneApi, config::DEFAULT_SERVER_ID,
    validation::normalize_fqdn,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    #[command(flatten)]
    pdns: PdnsArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct PdnsArgs {
    /// PowerDNS API URL (without the /api/v1 suffix)
    #[arg(long, value_name = "URL", env = "PDNS_API_URL", default_value = "http://localhost:8081")]
    api_url: String,
    /// PowerDNS API key
    #[arg(long, value_name = "KEY", env = "PDNS_API_KEY", hide_env_values = true)]
    api_key: String,
    /// PowerDNS server ID
    #[arg(long, value_name = "ID", env = "PDNS_SERVER_ID", default_value = DEFAULT_SERVER_ID)]
    server_id: String,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Command {
    /// Print a zone as JSON
    GetZone {
        #[arg(value_name = "ZONE")]
        name: String,
    },
    /// Create a native zone
    CreateZone {
        #[arg(value_name = "ZONE")]
        name: String,
        /// Authoritative nameserver FQDN (repeat for multiple values)
        #[arg(long = "nameserver", value_name = "FQDN", required = true)]
        nameservers: Vec<String>,
    },
    /// Replace a record set with a single record
    CreateRecord {
        name: String,
        #[arg(value_name = "TYPE")]
        rrtype: String,
        content: String,
        #[arg(long, default_value_t = 300)]
        ttl: u32,
        #[arg(long, value_name = "ZONE")]
        zone: String,
    },
    /// Write the zone's SOA record (serial = current Unix time)
    CreateSoa {
        name: String,
        #[arg(long, value_name = "FQDN")]
        primary_ns: String,
        /// Contact mailbox in DNS form, e.g. hostmaster.example.org.
        #[arg(long, value_name = "FQDN")]
        admin: String,
        #[arg(long, default_value_t = 3600)]
        refresh: u32,
        #[arg(long, default_value_t = 600)]
        retry: u32,
        #[arg(long, default_value_t = 86400)]
        expire: u32,
        #[arg(long, default_value_t = 300)]
        negative_ttl: u32,
        #[arg(long, value_name = "ZONE")]
        zone: String,
    },
    /// Write an SRV record
    CreateSrv {
        #[arg(long)]
        service: String,
        #[arg(long)]
        proto: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = 300)]
        ttl: u32,
        #[arg(long, default_value_t = 0)]
        priority: u16,
        #[arg(long, default_value_t = 0)]
        weight: u16,
        #[arg(long)]
        port: u16,
        #[arg(long, value_name = "FQDN")]
        target: String,
        #[arg(long, value_name = "ZONE")]
        zone: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = PdnsConfig::new(&cli.pdns.api_url, &cli.pdns.api_key, &cli.pdns.server_id);
    let client = PowerDnsClient::with_http(reqwest::Client::new(), config);

    run(&client, cli.command).await
}

async fn run(api: &dyn ZoneApi, command: Command) -> Result<()> {
    match command {
        Command::GetZone { name } => {
            let name = fqdn(&name)?;
            let zone = api
                .get_zone(&name)
                .await
                .with_context(|| format!("failed to fetch zone {name}"))?;
            println!("{}", serde_json::to_string_pretty(&zone)?);
        }
        Command::CreateZone { name, nameservers } => {
            let name = fqdn(&name)?;
            let nameservers = nameservers
                .iter()
                .map(|ns| fqdn(ns))
                .collect::<Result<Vec<_>>>()?;
            let status = api
                .create_zone(&name, &nameservers)
                .await
                .with_context(|| format!("failed to create zone {name}"))?;
            info!(zone = %name, %status, "zone created");
        }
        Command::CreateRecord {
            name,
            rrtype,
            content,
            ttl,
            zone,
        } => {
            let name = fqdn(&name)?;
            let zone = fqdn(&zone)?;
            let rrtype = rrtype.to_ascii_uppercase();
            let status = api
                .create_record(&name, &rrtype, &content, ttl, &zone)
                .await
                .with_context(|| format!("failed to write {rrtype} record {name}"))?;
            info!(%name, %rrtype, %status, "record written");
        }
        Command::CreateSoa {
            name,
            primary_ns,
            admin,
            refresh,
            retry,
            expire,
            negative_ttl,
            zone,
        } => {
            let name = fqdn(&name)?;
            let zone = fqdn(&zone)?;
            let soa = SoaParams {
                primary_ns: fqdn(&primary_ns)?,
                admin: fqdn(&admin)?,
                refresh,
                retry,
                expire,
                negative_ttl,
            };
            let status = api
                .create_soa_record(&name, &soa, &zone)
                .await
                .with_context(|| format!("failed to write SOA for {name}"))?;
            info!(%name, %status, "SOA written");
        }
        Command::CreateSrv {
            service,
            proto,
            name,
            ttl,
            priority,
            weight,
            port,
            target,
            zone,
        } => {
            let srv = SrvParams {
                service,
                proto,
                name,
                ttl,
                priority,
                weight,
                port,
                target: fqdn(&target)?,
            };
            let zone = fqdn(&zone)?;
            let status = api
                .create_srv_record(&srv, &zone)
                .await
                .with_context(|| format!("failed to write SRV record {}", srv.name))?;
            info!(name = %srv.name, %status, "SRV written");
        }
    }

    Ok(())
}

fn fqdn(input: &str) -> Result<String> {
    normalize_fqdn(input).with_context(|| format!("invalid domain name '{input}'"))
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerzone::InMemoryZoneApi;

    #[tokio::test]
    async fn create_zone_command_normalizes_names() {
        let api = InMemoryZoneApi::new();
        run(
            &api,
            Command::CreateZone {
                name: "example.org".into(),
                nameservers: vec!["ns1.example.org".into()],
            },
        )
        .await
        .unwrap();

        let zones = api.zones();
        assert_eq!(zones[0].name, "example.org.");
        assert_eq!(zones[0].nameservers, vec!["ns1.example.org.".to_string()]);
    }

    #[tokio::test]
    async fn invalid_zone_name_never_reaches_api() {
        let api = InMemoryZoneApi::new();
        let res = run(
            &api,
            Command::CreateRecord {
                name: "www.example.org".into(),
                rrtype: "a".into(),
                content: "192.0.2.1".into(),
                ttl: 60,
                zone: "bad zone".into(),
            },
        )
        .await;
        assert!(res.is_err());
        assert!(api.records().is_empty());
    }

    #[test]
    fn cli_parses_srv_command() {
        let cli = Cli::try_parse_from([
            "powerzone",
            "--api-key",
            "changeme",
            "create-srv",
            "--service",
            "sip",
            "--proto",
            "tcp",
            "--name",
            "example.org",
            "--port",
            "5060",
            "--target",
            "sipserver.example.org.",
            "--zone",
            "example.org.",
        ])
        .unwrap();
        assert_eq!(cli.pdns.server_id, "localhost");
        assert!(matches!(cli.command, Command::CreateSrv { port: 5060, .. }));
    }
}
