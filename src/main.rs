use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use gh2jira::app::{App, Options};
use gh2jira::config::Config;
use gh2jira::logger;
use log::LevelFilter;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("gh2jira")
        .version(crate_version!())
        .about("Convert GitHub issues and comments into a Jira JSON import file")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("Path to the configuration file (default: ~/.config/gh2jira/config.yml)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("DIR")
                .help("Directory the output files are written to")
                .default_value(".")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("dump-raw")
                .long("dump-raw")
                .help("Also write the raw GitHub records to github-export.json"),
        )
        .arg(
            Arg::with_name("from-dump")
                .long("from-dump")
                .value_name("FILE")
                .help("Convert a previously written github-export.json instead of fetching")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Increase logging verbosity (-v debug, -vv trace)"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .conflicts_with("verbose")
                .help("Only log warnings and errors"),
        )
        .get_matches();

    let level = if matches.is_present("quiet") {
        LevelFilter::Warn
    } else {
        match matches.occurrences_of("verbose") {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    logger::init(level)?;

    let config = Config::load(matches.value_of("config"))?;
    let options = Options {
        output_dir: PathBuf::from(matches.value_of("output").unwrap_or(".")),
        dump_raw: matches.is_present("dump-raw"),
        from_dump: matches.value_of("from-dump").map(PathBuf::from),
    };

    App::start(config, options).await?;
    Ok(())
}
