//! Markfolio CLI
//!
//! Usage:
//!   markfolio [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>    html, fragment, json or preview
//!   -t, --theme <ID>         Theme id (falls back to the first theme)
//!       --theme-file <FILE>  Custom theme (TOML format)
//!   -o, --output <FILE>      Write to a file instead of stdout
//!       --export             Write the page to "<name>.html"
//!       --list-themes        List available themes
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use markfolio::preferences::DEFAULT_PREFERENCES_FILE;
use markfolio::{
    export_filename, parse, preview, render_html_with_config, sample, Catalog, Error, HtmlConfig,
    Preferences, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Standalone HTML page
    Html,
    /// Embeddable HTML fragment for an on-screen preview
    Fragment,
    /// Parsed record as JSON
    Json,
    /// Plain Markdown rendering, without the portfolio template
    Preview,
}

#[derive(Parser)]
#[command(name = "markfolio")]
#[command(about = "Render Markdown portfolios as themed HTML")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Theme id; unknown ids fall back to the first theme
    #[arg(short, long)]
    theme: Option<String>,

    /// Custom theme file (TOML format), added to the catalog and selected
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, conflicts_with = "export")]
    output: Option<PathBuf>,

    /// Write the page to a file named after the portfolio owner
    #[arg(long)]
    export: bool,

    /// Preferences file holding the remembered theme
    #[arg(long, default_value = DEFAULT_PREFERENCES_FILE)]
    prefs: PathBuf,

    /// Remember the selected theme for later runs
    #[arg(long)]
    remember: bool,

    /// List available themes
    #[arg(long)]
    list_themes: bool,

    /// Print a complete example document
    #[arg(long)]
    sample: bool,

    /// Print a fill-in template document
    #[arg(long)]
    placeholder: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Error> {
    if cli.sample {
        print!("{}", sample::SAMPLE);
        return Ok(());
    }
    if cli.placeholder {
        print!("{}", sample::PLACEHOLDER);
        return Ok(());
    }

    let mut catalog = Catalog::builtin();
    let mut selected = cli.theme.clone();
    if let Some(path) = &cli.theme_file {
        let theme = Theme::from_file(path)?;
        info!(id = %theme.id, path = %path.display(), "loaded custom theme");
        if selected.is_none() {
            selected = Some(theme.id.to_string());
        }
        catalog = catalog.with_theme(theme);
    }

    let mut prefs = Preferences::load(&cli.prefs)?;
    let theme = prefs.resolve_theme(&catalog, selected.as_deref()).clone();

    if cli.list_themes {
        for t in catalog.iter() {
            let marker = if t.id == theme.id { "*" } else { " " };
            println!("{} {:<10} {:<10} {}", marker, t.id, t.name, t.description);
        }
        return Ok(());
    }

    if cli.remember && prefs.theme.as_deref() != Some(&*theme.id) {
        prefs.theme = Some(theme.id.to_string());
        prefs.save(&cli.prefs)?;
        info!(theme = %theme.id, "remembered theme");
    }

    // Without a file and with an interactive stdin there is nothing to render
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return Ok(());
    }

    let source = read_source(cli.input.as_deref())?;
    let record = parse(&source);

    let output = match cli.format {
        Format::Html => render_html_with_config(&record, &theme, &HtmlConfig::default()),
        Format::Fragment => render_html_with_config(&record, &theme, &HtmlConfig::fragment()),
        Format::Json => serde_json::to_string_pretty(&record)? + "\n",
        Format::Preview => preview::markdown_to_html(&source),
    };

    let target = match (&cli.output, cli.export) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(PathBuf::from(export_filename(&record))),
        (None, false) => None,
    };

    match target {
        Some(path) => {
            fs::write(&path, output).map_err(|e| Error::write(&path, e))?;
            info!(path = %path.display(), "wrote output");
        }
        None => print!("{}", output),
    }
    Ok(())
}

fn read_source(input: Option<&Path>) -> Result<String, Error> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|e| Error::read(path, e)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| Error::read("<stdin>", e))?;
            Ok(buffer)
        }
    }
}

fn print_intro() {
    println!(
        r####"Markfolio - Markdown portfolios rendered as themed HTML

USAGE:
    markfolio [OPTIONS] [FILE]
    cat resume.md | markfolio

OPTIONS:
    -f, --format       html (default), fragment, json, preview
    -t, --theme        Theme id (see --list-themes)
    --theme-file       Custom theme (TOML file)
    -o, --output       Write to a file instead of stdout
    --export           Write to "<name>.html"
    --remember         Keep the selected theme for later runs
    --sample           Print an example document
    --placeholder      Print a template document
    -h, --help         Print help

QUICK START:
    markfolio --placeholder > resume.md
    markfolio resume.md --theme classic --export

DOCUMENT LAYOUT:
    # Name                      Level-1 heading sets the name
    ## Contact                  Lines like "Email: you@example.com"
    ## Summary                  Free text, joined into one paragraph
    ## Experience / Education   "### Title" starts an entry; lines below
    ## Projects                 become its description
    ## Skills                   "- Skill" bullets"####
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["markfolio", "cv.md", "-f", "json", "-t", "classic", "-vv"])
            .unwrap();
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.theme.as_deref(), Some("classic"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.prefs, PathBuf::from(DEFAULT_PREFERENCES_FILE));

        assert!(Cli::try_parse_from(["markfolio", "--export", "-o", "out.html"]).is_err());
    }
}
