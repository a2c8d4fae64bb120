/// Rankdex API demo
///
/// Walks through the main engine operations:
/// - Seeding a population
/// - Top-K leaderboard with dense ranks
/// - Substring search
/// - Live rating updates
/// - Statistics

use rankdex::core::config::Config;
use rankdex::core::engine::LeaderboardEngine;
use rankdex::core::types::UserId;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Rankdex - Leaderboard Engine Demo ===\n");

    // Step 1: Start the engine with a small random population
    println!("Starting engine...");
    let config = Config {
        initial_users: 1000,
        ..Config::default()
    };
    let engine = LeaderboardEngine::new(config)?;
    println!("  {} users seeded\n", engine.total_users());

    // Step 2: Top of the leaderboard
    println!("Top 10:");
    for entry in engine.get_leaderboard(10) {
        println!("  #{:<4} {:<24} {}", entry.rank, entry.username, entry.rating);
    }
    println!();

    // Step 3: Substring search
    println!("Search 'rahul':");
    let mut hits = engine.search("rahul");
    hits.sort_by(|a, b| a.rank.cmp(&b.rank));
    for entry in hits.iter().take(5) {
        println!("  #{:<4} {:<24} {}", entry.rank, entry.username, entry.rating);
    }
    println!("  ({} total matches)\n", hits.len());

    // Step 4: Push an update and watch it land in the next snapshot
    println!("Boosting user 1 to rating 5000...");
    engine.submit_update(UserId(1), 5000);
    thread::sleep(Duration::from_millis(300));

    let snap = engine.snapshot();
    println!(
        "  user 1 now rated {:?} at rank {}\n",
        snap.user_rating(UserId(1)),
        snap.rank(5000)
    );

    // Step 5: Stats
    let stats = engine.stats();
    println!("Stats:");
    println!("  total_users:     {}", stats.total_users);
    println!("  snapshot_age_ms: {}", stats.snapshot_age_ms);
    println!("  rating range:    [{}, {}]", stats.min_rating, stats.max_rating);

    Ok(())
}
