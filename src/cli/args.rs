use clap::{Parser, Subcommand};

use crate::models::{PrayerName, TargetTime};

#[derive(Parser, Debug)]
#[command(
    name = "namaz",
    version,
    about = "Terminal prayer-time reminder with a live clock and azan alarm"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Pin a target time for this session, e.g. `--set fajr=05:10` (repeatable)
    #[arg(long = "set", value_name = "PRAYER=HH:MM", value_parser = parse_preset)]
    pub presets: Vec<(PrayerName, TargetTime)>,

    /// Don't fetch reference times from the timings service
    #[arg(long)]
    pub no_fetch: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and print today's reference prayer times
    Times,
    /// Show the config file location and the effective settings
    Config,
}

fn parse_preset(s: &str) -> Result<(PrayerName, TargetTime), String> {
    let (prayer, time) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PRAYER=HH:MM, got '{}'", s))?;
    let prayer = prayer.trim().parse::<PrayerName>().map_err(|e| e.to_string())?;
    let time = time.parse::<TargetTime>().map_err(|e| e.to_string())?;
    Ok((prayer, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_parsed_in_order() {
        let cli = Cli::try_parse_from([
            "namaz",
            "--set",
            "fajr=05:10",
            "--set",
            "Zuhr=12:30",
            "--no-fetch",
        ])
        .unwrap();
        assert!(cli.command.is_none());
        assert!(cli.no_fetch);
        assert_eq!(
            cli.presets,
            vec![
                (PrayerName::Fajr, TargetTime::new(5, 10).unwrap()),
                (PrayerName::Dhuhr, TargetTime::new(12, 30).unwrap()),
            ]
        );
    }

    #[test]
    fn bad_presets_are_rejected() {
        assert!(Cli::try_parse_from(["namaz", "--set", "fajr"]).is_err());
        assert!(Cli::try_parse_from(["namaz", "--set", "tahajjud=03:00"]).is_err());
        assert!(Cli::try_parse_from(["namaz", "--set", "isha=7pm"]).is_err());
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["namaz", "times"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Times)));
        let cli = Cli::try_parse_from(["namaz", "config"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config)));
    }
}
