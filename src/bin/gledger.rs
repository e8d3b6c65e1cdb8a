//! # gledger CLI Entry Point
//!
//! Binary entry point for the general ledger data tools.
//!
//! ## Usage
//!
//! ```bash
//! # Validate a configuration file
//! gledger check conf/gledger.conf
//!
//! # Render a delimited data file as a table
//! gledger render --title "Users List" sample_data/users
//!
//! # Generate INSERT statements from a delimited data file
//! gledger sql --table users sample_data/users
//! ```

use eyre::{bail, Result, WrapErr};
use gledger::{read_delim_file, Config, Report, TextBuf};
use std::env;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "--version" | "-v" => {
            println!("gledger {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "check" => check(&args[2..]),
        "render" => render(&args[2..]),
        "sql" => sql(&args[2..]),
        other => bail!("Unknown command: {}", other),
    }
}

fn check(args: &[String]) -> Result<()> {
    let mut path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            arg if arg.starts_with('-') => bail!("Unknown option: {}", arg),
            p => {
                if path.is_some() {
                    bail!("Multiple configuration files specified");
                }
                path = Some(p.to_string());
            }
        }
        i += 1;
    }

    let path = match path {
        Some(p) => p,
        None => {
            print_usage();
            return Ok(());
        }
    };

    let config = Config::load(&path).wrap_err_with(|| format!("check failed for {}", path))?;
    for (key, value) in config.iter() {
        println!("{} = {}", key, value);
    }
    Ok(())
}

fn render(args: &[String]) -> Result<()> {
    let mut delim = b':';
    let mut title: Option<String> = None;
    let mut path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--delim" | "-d" => {
                i += 1;
                delim = delim_arg(args.get(i))?;
            }
            "--title" | "-t" => {
                i += 1;
                title = match args.get(i) {
                    Some(t) => Some(t.clone()),
                    None => bail!("--title needs a value"),
                };
            }
            arg if arg.starts_with('-') => bail!("Unknown option: {}", arg),
            p => {
                if path.is_some() {
                    bail!("Multiple input files specified");
                }
                path = Some(p.to_string());
            }
        }
        i += 1;
    }

    let path = match path {
        Some(p) => p,
        None => {
            print_usage();
            return Ok(());
        }
    };

    let set =
        read_delim_file(&path, delim).wrap_err_with(|| format!("could not render {}", path))?;

    match title {
        Some(title) => {
            let mut report = Report::new();
            report.set_title(TextBuf::from(title));
            report.set_body(set.text_report());
            print!("{}", report.render());
        }
        None => print!("{}", set.text_report()),
    }
    Ok(())
}

fn sql(args: &[String]) -> Result<()> {
    let mut delim = b':';
    let mut table: Option<String> = None;
    let mut path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--delim" | "-d" => {
                i += 1;
                delim = delim_arg(args.get(i))?;
            }
            "--table" => {
                i += 1;
                table = match args.get(i) {
                    Some(t) => Some(t.clone()),
                    None => bail!("--table needs a value"),
                };
            }
            arg if arg.starts_with('-') => bail!("Unknown option: {}", arg),
            p => {
                if path.is_some() {
                    bail!("Multiple input files specified");
                }
                path = Some(p.to_string());
            }
        }
        i += 1;
    }

    let table = match table {
        Some(t) => t,
        None => bail!("sql needs --table <NAME>"),
    };
    let path = match path {
        Some(p) => p,
        None => {
            print_usage();
            return Ok(());
        }
    };

    let mut set = read_delim_file(&path, delim)
        .wrap_err_with(|| format!("could not generate statements from {}", path))?;

    set.seek_start();
    while let Some(query) = set.next_insert_query(&table)? {
        println!("{}", query);
    }
    Ok(())
}

fn delim_arg(arg: Option<&String>) -> Result<u8> {
    let arg = match arg {
        Some(a) => a,
        None => bail!("--delim needs a value"),
    };
    match arg.as_bytes() {
        [b] => Ok(*b),
        _ => bail!("delimiter must be a single byte, got {:?}", arg),
    }
}

fn print_usage() {
    println!("gledger - General ledger data tools");
    println!();
    println!("USAGE:");
    println!("    gledger <COMMAND> [OPTIONS] <FILE>");
    println!();
    println!("COMMANDS:");
    println!("    check      Parse a configuration file and print its pairs");
    println!("    render     Render a delimited data file as a text table");
    println!("    sql        Generate INSERT statements from a delimited data file");
    println!();
    println!("OPTIONS:");
    println!("    -d, --delim <CHAR>    Field delimiter for data files (default ':')");
    println!("    -t, --title <TEXT>    Wrap the rendered table in a titled report");
    println!("        --table <NAME>    Target table for generated INSERT statements");
    println!("    -h, --help            Print help information");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    gledger check conf/gledger.conf");
    println!("    gledger render --title \"Users List\" sample_data/users");
    println!("    gledger sql --table users sample_data/users");
}
