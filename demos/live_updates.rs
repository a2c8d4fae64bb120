/// Live update demo
///
/// Runs the engine with the random update simulator enabled and prints the
/// top of the board a few times while ratings churn underneath.

use rankdex::core::config::Config;
use rankdex::core::engine::LeaderboardEngine;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        initial_users: 5000,
        simulate_updates: true,
        ..Config::default()
    };
    let engine = LeaderboardEngine::new(config)?;

    for round in 1..=5 {
        thread::sleep(Duration::from_millis(500));

        println!("--- round {} ---", round);
        for entry in engine.get_leaderboard(5) {
            println!("  #{:<3} {:<24} {}", entry.rank, entry.username, entry.rating);
        }

        let writer = engine.writer_stats();
        println!(
            "  applied={} dropped={} published={}\n",
            writer.updates_applied, writer.updates_dropped, writer.snapshots_published
        );
    }

    Ok(())
}
