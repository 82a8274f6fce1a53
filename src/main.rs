use chrono::{Local, NaiveDate};
use clap::Parser;
use daynotes::application::{ConfigService, ImportChannelService, SplitMessageService};
use daynotes::cli::{format_entries, Cli, Commands};
use daynotes::error::{DaynotesError, Result};
use daynotes::infrastructure::{Config, ExportDirectory, OutputFormat};
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

fn main() {
    // warn by default; RUST_LOG=debug for details
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = Config::locate(cli.config.as_deref());

    match cli.command {
        Commands::Split {
            file,
            date,
            author,
            format,
        } => {
            let config = Config::load(&config_path)?;
            let format = output_format(format.as_deref(), &config)?;

            let date = match date {
                Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                    .map_err(|_| DaynotesError::InvalidDate(d.clone()))?,
                None => Local::now().date_naive(),
            };
            let author = author
                .or_else(|| std::env::var("USER").ok())
                .unwrap_or_else(|| "me".to_string());
            let text = read_message(file.as_deref())?;

            let entries = SplitMessageService::new().execute(date, &author, &text);
            print_output(&format_entries(&entries, format, &config.date_format)?)
        }
        Commands::Import {
            export,
            channel,
            format,
        } => {
            let config = Config::load(&config_path)?;
            let format = output_format(format.as_deref(), &config)?;
            let channel = channel.unwrap_or_else(|| config.channel.clone());
            let channel = channel.trim_start_matches('#');

            let service = ImportChannelService::new(ExportDirectory::open(export)?);
            let entries = service.execute(channel)?;
            print_output(&format_entries(&entries, format, &config.date_format)?)
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(config_path);

            if list {
                let config = service.list()?;
                println!("channel = {}", config.channel);
                println!("format = {}", config.format);
                println!("date_format = {}", config.date_format);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: daynotes config [--list | <key> [<value>]]");
                println!("Valid keys: channel, format, date_format");
                Ok(())
            }
        }
    }
}

/// Command-line format wins over the configured one
fn output_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(f) => OutputFormat::from_str(f).map_err(DaynotesError::Config),
        None => Ok(config.format),
    }
}

/// Read the message from a file, or stdin for `-` / no file
fn read_message(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_output(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
