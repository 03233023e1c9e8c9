use anyhow::{Context, Result};
use clap::Parser;
use gtfs_records::FeedReader;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Prints statistics about a GTFS feed
#[derive(Parser, Debug)]
struct Args {
    /// Directory or zip archive holding the feed
    path: PathBuf,
    /// Also prints the first agency as JSON
    #[clap(long)]
    json: bool,
    /// Logs and drops the lines that can not be decoded instead of failing
    #[clap(long)]
    skip_invalid_records: bool,
    /// Does not read stop_times.txt
    #[clap(long)]
    no_stop_times: bool,
}

impl Args {
    fn reader(&self) -> FeedReader {
        FeedReader::default()
            .skip_invalid_records(self.skip_invalid_records)
            .read_stop_times(!self.no_stop_times)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("Loading schedules for {}", args.path.display());
    let time = Instant::now();
    let feed = args
        .reader()
        .read_from_path(&args.path)
        .with_context(|| format!("impossible to read the GTFS feed at {}", args.path.display()))?;
    feed.print_stats();

    if args.json {
        let agency = feed.agency().context("the feed has no agency")?;
        println!("{}", serde_json::to_string_pretty(agency)?);
    }
    info!("Elapsed: {}", time.elapsed().as_secs_f32());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags() {
        let args = Args::try_parse_from(["transit", "gtfs-records/fixtures/basic"]).unwrap();
        assert_eq!(PathBuf::from("gtfs-records/fixtures/basic"), args.path);
        assert!(!args.json);
        let reader = args.reader();
        assert!(reader.read_stop_times);
        assert!(!reader.skip_invalid_records);
    }

    #[test]
    fn flags_map_to_the_reader() {
        let args = Args::try_parse_from([
            "transit",
            "feed.zip",
            "--json",
            "--skip-invalid-records",
            "--no-stop-times",
        ])
        .unwrap();
        assert!(args.json);
        let reader = args.reader();
        assert!(!reader.read_stop_times);
        assert!(reader.skip_invalid_records);
    }

    #[test]
    fn help_is_not_a_path() {
        let err = Args::try_parse_from(["transit", "--help"]).unwrap_err();
        assert_eq!(clap::error::ErrorKind::DisplayHelp, err.kind());
    }

    #[test]
    fn path_starting_with_dashes() {
        let args = Args::try_parse_from(["transit", "--", "--feed"]).unwrap();
        assert_eq!(PathBuf::from("--feed"), args.path);
    }

    #[test]
    fn path_is_required() {
        assert!(Args::try_parse_from(["transit", "--json"]).is_err());
    }

    #[test]
    fn reads_the_fixture_feed() {
        let args = Args::try_parse_from(["transit", "gtfs-records/fixtures/basic"]).unwrap();
        let feed = args.reader().read_from_path(&args.path).unwrap();
        assert_eq!(1, feed.agencies.len());
    }
}
