use admin_console::logger::init_logger_with_file;
use admin_console::{AdminConsole, ConsoleConfig, EntityStatus, StatusSummary};
use anyhow::Context;

const LEADERBOARD_SIZE: usize = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = ConsoleConfig::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Venue console starting (api: {})", config.api_url);

    let client = config
        .client_config()
        .build_http_client()
        .context("failed to build HTTP client")?;

    let mut console = AdminConsole::open(config.session(), client.clone(), client)?;
    console
        .refresh_all()
        .await
        .context("failed to load admin data")?;

    print_summary("Venues", console.venues().summary(), "revenue");
    if let Some(stats) = console.venues().server_stats() {
        print_counts("Venues (server)", stats);
    }
    print_summary("Bookings", console.bookings().summary(), "booked");
    if let Some(stats) = console.bookings().server_stats() {
        print_counts("Bookings (server)", stats);
    }

    println!("\nTop owners");
    for (rank, row) in console.owner_leaderboard(LEADERBOARD_SIZE).iter().enumerate() {
        println!(
            "{:>3}. {:<30} {:>3} venues {:>12.2}",
            rank + 1,
            row.owner_name,
            row.venue_count,
            row.revenue
        );
    }

    Ok(())
}

fn print_summary<S: EntityStatus>(title: &str, summary: &StatusSummary<S>, amount_label: &str) {
    print_counts(title, summary);
    println!("  {:<14} {:>10.2}", amount_label, summary.amount);
}

fn print_counts<S: EntityStatus>(title: &str, summary: &StatusSummary<S>) {
    println!("\n{} ({})", title, summary.total);
    for (status, count) in &summary.counts {
        println!("  {:<14} {:>10}", status.to_string(), count);
    }
}
