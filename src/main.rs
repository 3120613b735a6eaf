use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use regex::Regex;
use serde_json::{json, Value};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    sync::OnceLock,
    time::Instant,
};
use sufx::SuffixArray;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input text; read from stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Keep whitespace as is instead of collapsing runs to a single space
    #[arg(long)]
    raw: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every suffix with its offset and LCP with the previous one
    Table,
    /// Longest repeating substring
    Lrs,
    /// Longest repeating non-overlapping substring
    Lrnos,
    /// Number of suffixes strictly less than QUERY
    Rank { query: String },
    /// Suffix of the given rank
    Select { rank: usize },
    /// Number of occurrences of QUERY
    Count { query: String },
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

static WHITESPACE: OnceLock<Regex> = OnceLock::new();

/// Collapses every whitespace run to a single space.
fn normalize(text: &str) -> String {
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
    re.replace_all(text, " ").into_owned()
}

fn run(args: &Args, sa: &SuffixArray) -> Result<Value> {
    let value = match &args.command {
        Command::Table => {
            let rows: Vec<Value> = (0..sa.len())
                .map(|i| {
                    let lcp = (i > 0).then(|| sa.longest_common_prefix(i));
                    json!({
                        "rank": i,
                        "index": sa.index(i),
                        "lcp": lcp,
                        "select": sa.select(i),
                    })
                })
                .collect();
            Value::Array(rows)
        }
        Command::Lrs => json!(sa.longest_repeating_substring()),
        Command::Lrnos => json!(sa.longest_repeating_non_overlapping_substring()),
        Command::Rank { query } => json!(sa.rank(query)),
        Command::Select { rank } => {
            ensure!(
                *rank < sa.len(),
                "rank {} out of range, the text has {} suffixes",
                rank,
                sa.len()
            );
            json!(sa.select(*rank))
        }
        Command::Count { query } => json!(sa.positions(query).len()),
    };
    Ok(value)
}

fn print(value: &Value, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(value)?);
        return Ok(());
    }

    match value {
        Value::Array(rows) => {
            println!("{:>6} {:>6} {:>6}  select", "i", "ind", "lcp");
            for row in rows {
                let lcp = match &row["lcp"] {
                    Value::Null => "-".to_string(),
                    lcp => lcp.to_string(),
                };
                println!(
                    "{:>6} {:>6} {:>6}  {}",
                    row["rank"].to_string(),
                    row["index"].to_string(),
                    lcp,
                    row["select"].as_str().unwrap_or_default()
                );
            }
        }
        Value::String(s) => println!("{}", s),
        other => println!("{}", other),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let mut text = read_input(args.input.as_ref())?;
    if !args.raw {
        text = normalize(&text);
    }
    info!("loaded {} characters", text.chars().count());

    let start = Instant::now();
    let sa = SuffixArray::new(&text);
    debug!("suffix array built in {:?}", start.elapsed());

    let value = run(&args, &sa)?;
    print(&value, args.json)
}
