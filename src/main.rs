use coach_pro::display::{print_rotation, write_rotation_to_file};
use coach_pro::roster::{self, export_roster_to_csv, Team};
use coach_pro::rotation::{generate_rotation, pool_covers_court, RotationConfig};
use coach_pro::store::Store;
use coach_pro::web;

fn data_dir() -> String {
    std::env::var("COACH_PRO_DATA").unwrap_or_else(|_| "data".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args.get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        println!("Starting web server on port {}...", port);
        println!("Storing data under {}/", data_dir());
        println!("Access the whiteboard at http://localhost:{}", port);

        web::start_server(port, data_dir()).await?;
        return Ok(());
    }

    // CLI mode: compute a rotation for the persisted roster
    let store = Store::open(data_dir())?;

    println!("Loading roster...");
    let players = store.load_players()?.unwrap_or_else(roster::default_roster);
    println!("Loaded {} players", players.len());

    let config = RotationConfig::default();
    let pool = roster::available_players(&players, Team::Home);

    println!("\n\n=== Running Rotation Calculator ===");
    println!(
        "{} available home players, {} on court, {}-minute shifts over {} minutes",
        pool.len(),
        config.players_on_court,
        config.period_length,
        config.game_minutes
    );

    // The engine leaves pool-size validation to its callers; an undersized
    // pool would wrap and seat the same player twice in one shift
    let shifts = if pool_covers_court(&pool, &config) {
        generate_rotation(&pool, &config)
    } else {
        println!(
            "⚠️  Not enough available home players: need at least {}, have {}",
            config.players_on_court,
            pool.len()
        );
        Vec::new()
    };
    print_rotation(&shifts, &players, &config);

    // Write the rotation and roster to files
    println!("\n=== Writing Output Files ===");
    write_rotation_to_file(&shifts, &players, &config, "rotation.txt")?;
    export_roster_to_csv(&players, "roster.csv")?;
    println!("Saved:");
    println!("  - rotation.txt");
    println!("  - roster.csv");

    Ok(())
}
