//! trawl CLI — fetch TVmaze records and filter them.
//!
//! ```text
//! trawl --data-file-path test_data/shows.json --filter-dict '{"name": "Archer"}'
//! trawl --endpoint shows/315/episodes --filter-dict '{"season": 5, "number": 3}'
//! trawl --endpoint shows --filter-dict '{"status": "Ended", "schedule": {"days": ["Saturday"]}}'
//! ```

use std::error::Error;
use std::path::Path;
use std::process;

use trawl::FilterSpec;
use trawl_tvmaze::Client;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let cli = parse_args(args)?;

    let client = Client::new();
    let results = client
        .get_results(
            cli.endpoint.as_deref(),
            cli.data_file_path.as_deref().map(Path::new),
        )
        .map_err(|e| describe(&e))?;

    let filtered = results.filtered(&cli.filter);

    // serde_json maps are key-sorted, so the output is deterministic.
    let output = serde_json::to_string_pretty(filtered.records())
        .map_err(|e| format!("failed to render output: {e}"))?;
    println!("{output}");

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Argument parsing
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
struct CliArgs {
    endpoint: Option<String>,
    data_file_path: Option<String>,
    filter: FilterSpec,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut endpoint = None;
    let mut data_file_path = None;
    let mut filter = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--endpoint" => endpoint = Some(flag_value(args, &mut i)?),
            "--data-file-path" => data_file_path = Some(flag_value(args, &mut i)?),
            "--filter-dict" => filter = Some(parse_filter(&flag_value(args, &mut i)?)?),
            other => return Err(format!("unexpected argument \"{other}\"")),
        }
    }

    let filter = filter.ok_or("the --filter-dict argument is required")?;

    // Exactly one data source; the fetcher enforces this too, but failing
    // here gives a message in terms of the flags the user typed.
    if endpoint.is_some() == data_file_path.is_some() {
        return Err("specify either --endpoint or --data-file-path, but not both".into());
    }

    Ok(CliArgs {
        endpoint,
        data_file_path,
        filter,
    })
}

fn flag_value(args: &[String], i: &mut usize) -> Result<String, String> {
    let flag = &args[*i];
    let value = args
        .get(*i + 1)
        .ok_or_else(|| format!("{flag} requires a value"))?;
    *i += 2;
    Ok(value.clone())
}

fn parse_filter(raw: &str) -> Result<FilterSpec, String> {
    serde_json::from_str(raw).map_err(|e| format!("--filter-dict is not a JSON object: {e}"))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Diagnostics
// ═══════════════════════════════════════════════════════════════════════════════

/// Render an error with its full cause chain.
fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn print_usage() {
    eprintln!(
        "Usage: trawl (--endpoint <name> | --data-file-path <path>) --filter-dict <json>

Options:
  --endpoint <name>        TVmaze API endpoint (e.g. `shows`)
  --data-file-path <path>  Use the specified data file instead of downloading
  --filter-dict <json>     Filter criteria (e.g. `{{\"name\":\"Archer\"}}`)

Exactly one of --endpoint and --data-file-path must be given. Matching
records are printed to stdout as indented, key-sorted JSON."
    );
}
