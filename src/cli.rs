// CLI module - command-line argument parsing and handlers
//
// Provides:
// - folio [--page home|resume]: run the TUI
// - folio print [--page] [--width]: plain-text render to stdout
// - folio config [--show|--path|--reset]: configuration management

use crate::config::{Config, VERSION};
use crate::page::router::Route;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;

/// Personal portfolio in the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "Personal portfolio in the terminal", long_about = None)]
pub struct Cli {
    /// Page to open
    #[arg(long, value_enum, default_value_t = PageArg::Home)]
    pub page: PageArg,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    Home,
    Resume,
}

impl From<PageArg> for Route {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Home => Route::Home,
            PageArg::Resume => Route::Resume,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a page to stdout as plain text
    Print {
        /// Page to print
        #[arg(long, value_enum, default_value_t = PageArg::Home)]
        page: PageArg,

        /// Column width
        #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(20..))]
        width: u16,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Handle `folio config`
pub fn handle_config(show: bool, path: bool, reset: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        println!("Usage: folio config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!();
    println!(
        "# Relay: {}",
        if config.relay.is_configured() {
            "configured"
        } else {
            "not configured (contact form will not send)"
        }
    );

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush stderr")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let written = Config::reset()?;
    println!("Config reset to defaults: {}", written.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_home_tui() {
        let cli = Cli::try_parse_from(["folio"]).expect("parses");
        assert_eq!(cli.page, PageArg::Home);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_print_arguments() {
        let cli = Cli::try_parse_from(["folio", "print", "--page", "resume", "--width", "60"])
            .expect("parses");
        match cli.command {
            Some(Commands::Print { page, width }) => {
                assert_eq!(Route::from(page), Route::Resume);
                assert_eq!(width, 60);
            }
            _ => panic!("expected print"),
        }
    }

    #[test]
    fn test_print_rejects_tiny_width() {
        assert!(Cli::try_parse_from(["folio", "print", "--width", "5"]).is_err());
    }

    #[test]
    fn test_start_page() {
        let cli = Cli::try_parse_from(["folio", "--page", "resume"]).expect("parses");
        assert_eq!(Route::from(cli.page), Route::Resume);
    }
}
