//! Search games by name.
//!
//! Reads `IGDB_API_KEY` from the environment or a `.env` file.
//!
//! Run with: `cargo run -p igdb-lib --example search -- zelda`

use igdb_lib::IgdbClient;
use igdb_lib::api::query::FindQuery;
use igdb_lib::api::query::Sort;
use igdb_lib::model::EntityKind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let term = std::env::args().nth(1).unwrap_or_else(|| "zelda".to_string());
    let client = IgdbClient::from_env()?;

    println!("Searching for \"{}\"...", term);
    let query = FindQuery::new()
        .fields(["id", "name"])
        .search(term)
        .limit(10);
    for game in EntityKind::Game.find_objects(&client, query)? {
        println!("  {}", game);
    }

    println!("\nPlatforms with a logo:");
    let query = FindQuery::new()
        .fields("name")
        .filter("where platform_logo != null")
        .sort(Sort::asc("name"))
        .limit(5);
    for platform in EntityKind::Platform.find_objects(&client, query)? {
        println!("  {}", platform);
    }

    Ok(())
}
