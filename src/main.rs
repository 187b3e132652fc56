//! rtfhtml - render a resolved rich-text event stream as HTML

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

use rtfhtml::{Event, Font, FontFamily, HtmlConfig, render_document, render_html};

#[derive(Parser)]
#[command(name = "rtfhtml")]
#[command(version, about = "Render a rich-text event stream as HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    rtfhtml events.json                 Print an HTML fragment
    rtfhtml events.json out.html -d Doc Write a full document titled \"Doc\"
    cat events.json | rtfhtml -         Read events from stdin")]
struct Cli {
    /// JSON array of events ("-" for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (stdout if omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Default font applied to every section
    #[arg(long, value_name = "NAME")]
    font: Option<String>,

    /// Font family class of the default font (roman, swiss, modern, script, decor)
    #[arg(long, value_name = "FAMILY", default_value = "nil")]
    font_family: String,

    /// Default font size in points
    #[arg(long, value_name = "PT", default_value_t = 12.0)]
    font_size: f32,

    /// Wrap the output in a complete HTML document with this title
    #[arg(short, long, value_name = "TITLE")]
    document: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_family(name: &str) -> FontFamily {
    match name.to_ascii_lowercase().as_str() {
        "roman" => FontFamily::Roman,
        "swiss" => FontFamily::Swiss,
        "modern" => FontFamily::Modern,
        "script" => FontFamily::Script,
        "decor" => FontFamily::Decor,
        "tech" => FontFamily::Tech,
        "bidi" => FontFamily::Bidi,
        "nil" => FontFamily::Nil,
        other => {
            warn!("unknown font family {other:?}; using nil");
            FontFamily::Nil
        }
    }
}

fn config(cli: &Cli) -> HtmlConfig {
    let half_points = (cli.font_size * 2.0).round().clamp(1.0, f32::from(u16::MAX)) as u16;
    let mut config = HtmlConfig::new().with_default_font_size(half_points);
    if let Some(ref name) = cli.font {
        config = config.with_default_font(Font::new(name, parse_family(&cli.font_family)));
    }
    config
}

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let json = read_input(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;
    let events: Vec<Event> =
        serde_json::from_str(&json).map_err(|e| rtfhtml::Error::from(e).to_string())?;
    info!("read {} events from {}", events.len(), cli.input);

    let config = config(cli);
    let html = match cli.document {
        Some(ref title) => render_document(&events, config, title),
        None => render_html(&events, config),
    }
    .map_err(|e| e.to_string())?;

    match cli.output {
        Some(ref path) => fs::write(path, html).map_err(|e| format!("{path}: {e}")),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}").map_err(|e| e.to_string())
        }
    }
}
