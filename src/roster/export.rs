use std::error::Error;
use std::path::Path;

use csv::WriterBuilder;

use super::player::{Player, Team};

fn write_roster<W: std::io::Write>(players: &[Player], writer: W) -> Result<(), Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    wtr.write_record(["id", "name", "number", "team", "available"])?;
    for p in players {
        let team = match p.team {
            Team::Home => "home",
            Team::Away => "away",
        };
        wtr.write_record([
            p.id.as_str(),
            p.name.as_str(),
            p.number.as_str(),
            team,
            if p.available { "yes" } else { "no" },
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Renders the roster as a CSV document (for the download endpoint)
pub fn roster_to_csv(players: &[Player]) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    write_roster(players, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes the roster to a CSV file for printing or sharing
pub fn export_roster_to_csv<P: AsRef<Path>>(players: &[Player], path: P) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(path)?;
    write_roster(players, file)
}
