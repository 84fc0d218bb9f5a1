use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::roster::Player;
use crate::rotation::{RotationConfig, Shift};

/// Formats a player as jersey number plus name
pub fn format_player_name(number: &str, name: &str) -> String {
    format!("#{} {}", number, name)
}

/// Header label for a shift: the first period is the starting five, later
/// ones are labelled by when they begin
pub fn shift_label(period: u32, period_length: i64) -> String {
    if period == 1 {
        "Starting 5".to_string()
    } else {
        format!("{} MIN", (period as i64 - 1) * period_length)
    }
}

fn shift_line(shift: &Shift, players: &[Player]) -> String {
    let names: Vec<String> = shift
        .players
        .iter()
        .map(|id| {
            players
                .iter()
                .find(|p| &p.id == id)
                .map(|p| format_player_name(&p.number, &p.name))
                .unwrap_or_else(|| id.clone())
        })
        .collect();
    names.join(", ")
}

/// Prints a rotation in a readable format
pub fn print_rotation(shifts: &[Shift], players: &[Player], config: &RotationConfig) {
    println!("\n=== Rotation Schedule ===");
    println!("Total shifts: {}", shifts.len());

    if shifts.is_empty() {
        println!("  (no shifts - check the game settings and available players)");
        return;
    }

    for shift in shifts {
        println!(
            "  {:<12} -> {}",
            shift_label(shift.period, config.period_length),
            shift_line(shift, players)
        );
    }
}

/// Writes a rotation to a file, one shift per line
pub fn write_rotation_to_file(
    shifts: &[Shift],
    players: &[Player],
    config: &RotationConfig,
    filename: &str,
) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Rotation Schedule **")?;
    for shift in shifts {
        writeln!(
            file,
            "{} {}",
            shift_label(shift.period, config.period_length),
            shift_line(shift, players)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_the_period_clock() {
        assert_eq!(shift_label(1, 4), "Starting 5");
        assert_eq!(shift_label(2, 4), "4 MIN");
        assert_eq!(shift_label(5, 4), "16 MIN");
    }
}
