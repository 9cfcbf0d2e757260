use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use galleria::api::{CmdMessage, CmdResult, ConfigAction, GalleriaApi, GalleriaPaths, MessageLevel};
use galleria::commands;
use galleria::config::GalleriaConfig;
use galleria::error::Result;
use galleria::model::{Facet, FacetSet, FilterState};
use galleria::source::fs::JsonSource;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "galleria=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct AppContext {
    paths: GalleriaPaths,
    config: GalleriaConfig,
    global: bool,
    json: bool,
}

impl AppContext {
    fn api(&self, manifest: &Path) -> GalleriaApi<JsonSource> {
        GalleriaApi::new(JsonSource::new(manifest), self.config.clone())
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Facets { manifest } => handle_facets(&ctx, &manifest),
        Commands::Filter {
            manifest,
            search,
            medium,
            year,
            series,
        } => {
            let mut state = FilterState::new();
            if let Some(text) = search {
                state.set_search_text(&text);
            }
            for (facet, value) in [
                (Facet::Medium, medium),
                (Facet::Year, year),
                (Facet::Series, series),
            ] {
                if let Some(value) = value {
                    state.set_facet(facet, value);
                }
            }
            handle_filter(&ctx, &manifest, &state)
        }
        Commands::Session { manifest, script } => handle_session(&ctx, &manifest, &script),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project = cwd.join(".galleria");
    let global = std::env::var_os("GALLERIA_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "galleria", "galleria")
                .map(|dirs| dirs.config_dir().to_path_buf())
        });

    let paths = GalleriaPaths { project, global };
    let config_dir = if cli.global {
        paths.config_dir(true)?
    } else {
        paths.active_config_dir()
    };
    let config = GalleriaConfig::load(&config_dir)?;
    tracing::debug!(dir = %config_dir.display(), ?config, "loaded config");

    Ok(AppContext {
        paths,
        config,
        global: cli.global,
        json: cli.json,
    })
}

fn handle_facets(ctx: &AppContext, manifest: &Path) -> Result<()> {
    let result = ctx.api(manifest).facets()?;
    if ctx.json {
        return print_json(&result);
    }
    if let Some(facets) = &result.facets {
        print_facets(facets);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_filter(ctx: &AppContext, manifest: &Path, state: &FilterState) -> Result<()> {
    let result = ctx.api(manifest).filter(state)?;
    if ctx.json {
        return print_json(&result);
    }
    if result.summary.is_some() {
        print_items(&result);
    }
    print_messages(&result.messages);
    if let Some(status) = &result.status {
        println!("{}", status.bold());
    }
    Ok(())
}

fn handle_session(ctx: &AppContext, manifest: &Path, script: &Path) -> Result<()> {
    let script = std::fs::read_to_string(script)?;
    let result = ctx.api(manifest).session(&script)?;
    if ctx.json {
        return print_json(&result);
    }
    for update in &result.status_updates {
        println!(
            "{} {}",
            format!("{:>6}ms", update.at_ms).dimmed(),
            update.status
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&ctx.paths, ctx.global, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            for key in GalleriaConfig::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_json(result: &CmdResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_facets(facets: &FacetSet) {
    for facet in Facet::ALL {
        let values = facets.values(facet);
        println!("{}", facet.label().bold());
        println!("  {}", facet.any_label().dimmed());
        for value in values {
            println!("  {}", value);
        }
    }
}

const LINE_WIDTH: usize = 100;
const META_WIDTH: usize = 30;

fn print_items(result: &CmdResult) {
    if result.listed_items.is_empty() {
        println!("No artworks match.");
        return;
    }

    for li in &result.listed_items {
        let idx_str = format!("{:>3}. ", li.position);
        let meta = [&li.item.medium, &li.item.year, &li.item.series]
            .iter()
            .filter(|v| !v.is_empty())
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(" · ");

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + META_WIDTH);
        let title = truncate_to_width(&li.item.title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}{}{}{}",
            idx_str.yellow(),
            title,
            " ".repeat(padding),
            format!("{:>width$}", truncate_to_width(&meta, META_WIDTH), width = META_WIDTH).dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
