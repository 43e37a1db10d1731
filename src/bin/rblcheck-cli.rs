use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use rblcheck_lib::{
    Checker, Config, DnsChecker, ListingResult, SndsChecker, expand_network, run_checks,
};

#[derive(Parser)]
#[command(
    name = "rblcheck-cli",
    about = "Check outgoing mail IP addresses against DNSBLs and Microsoft SNDS"
)]
struct Cli {
    /// path to the JSON config file (networks + checker sections)
    #[arg(long = "config-path")]
    config_path: PathBuf,

    /// timeout in seconds for each DNS query and for the SNDS feed fetch
    #[arg(long, default_value_t = 5)]
    timeout: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let timeout = Duration::from_secs(cli.timeout);
    let config = Config::load(&cli.config_path)
        .with_context(|| format!("load configuration from {}", cli.config_path.display()))?;

    let mut addresses: Vec<IpAddr> = Vec::new();
    for network in &config.ip_networks {
        let expanded =
            expand_network(network).with_context(|| format!("expand network {network}"))?;
        addresses.extend(expanded);
    }

    // Checkers in declaration order: SNDS first, then the DNSBL hosts.
    let mut checkers: Vec<Box<dyn Checker>> = Vec::new();
    let mut snds_failed = false;

    if let Some(snds) = &config.checkers.snds {
        match SndsChecker::fetch(&snds.url, &snds.key, timeout) {
            Ok(checker) => {
                if checker.skipped_rows() > 0 {
                    warn!(rows = checker.skipped_rows(), "SNDS feed had malformed rows");
                }
                checkers.push(Box::new(checker));
            }
            // Fatal for the SNDS source only; DNS checks still run.
            Err(err) => {
                eprintln!("SNDS feed unavailable: {err}");
                snds_failed = true;
            }
        }
    }
    if let Some(dns) = &config.checkers.dns {
        for host in &dns.hosts {
            let checker = DnsChecker::new(host.as_str(), timeout)
                .with_context(|| format!("initialize DNS checker for {host}"))?;
            checkers.push(Box::new(checker));
        }
    }

    let report = run_checks(&addresses, &checkers);

    for result in &report.listed {
        println!("{}", render_listing(result));
    }
    for result in &report.inconclusive {
        eprintln!(
            "({}) IP address {} could not be checked against {} ({})",
            result.source,
            result.address,
            result.host,
            result.detail().unwrap_or("no detail")
        );
    }
    if !report.inconclusive.is_empty() {
        eprintln!(
            "{} check(s) were inconclusive; cannot confirm these addresses are clean",
            report.inconclusive.len()
        );
    }

    // 0 = confirmed clean; 1 = listed, inconclusive, or a source failed.
    if !report.is_clean() || snds_failed {
        std::process::exit(1);
    }
    Ok(())
}

fn render_listing(result: &ListingResult) -> String {
    format!(
        "({}) IP address {} is listed on {} ({})",
        result.source,
        result.address,
        result.host,
        result.detail().unwrap_or("")
    )
}
