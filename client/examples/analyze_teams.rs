use std::env;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use typedex_client::coverage::{EffectivenessRow, ElementalType, TeamCoverageReport};
use typedex_client::{TypedexClient, default_snapshot_path};

fn print_row(label: &str, row: &EffectivenessRow) {
    let cells: Vec<String> = row
        .iter()
        .map(|(t, m)| format!("{}:{}", &t.as_str()[..3], m))
        .collect();
    println!("  {:<10} {}", label, cells.join(" "));
}

fn print_report(title: &str, report: &TeamCoverageReport) {
    println!("\n=== {} ===", title);
    for member in &report.members {
        let types: Vec<&str> = member.types.iter().map(ElementalType::as_str).collect();
        println!("  • {} ({})", member.name, types.join("/"));
    }
    print_row("offence", &report.offensive);
    print_row("defence", &report.defensive);
    println!("  uncovered:         {:?}", report.uncovered);
    println!("  shared weaknesses: {:?}", report.shared_weaknesses);
}

fn team_from_env(var: &str, default: &str) -> Vec<String> {
    env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let team1 = team_from_env("TEAM1", "Charizard,Blastoise,Venusaur");
    let team2 = team_from_env("TEAM2", "Iron Valiant,Great Tusk,Slowbro-Galarian");

    let client = TypedexClient::new().context("Failed to build HTTP client")?;
    let snapshot = default_snapshot_path(env::temp_dir());
    client.cache().load_snapshot(&snapshot).await?;

    let analysis = client.analyze_teams(&team1, &team2).await?;

    print_report("Team 1", &analysis.report1);
    print_report("Team 2", &analysis.report2);

    println!("\n=== Average stats ===");
    for cmp in &analysis.stats.comparison {
        let diff = cmp
            .difference_pct
            .map(|d| format!("{:+.1}%", d))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "  {:<12} {:>4} vs {:<4} {}",
            cmp.stat.label(),
            cmp.team1_average,
            cmp.team2_average,
            diff
        );
    }

    println!("\n=== Speed ranking ===");
    for (i, entry) in analysis.stats.speed_ranking.iter().enumerate() {
        println!("  {:>2}. {:<20} {:>3} (team {})", i + 1, entry.name, entry.speed, entry.team);
    }

    client.cache().save_snapshot(&snapshot).await?;
    println!("\nCache: {:?}", client.cache().stats());
    Ok(())
}
