use clap::{Parser, Subcommand};
use collage_card::{builder, config, layout, output, types};
use std::path::PathBuf;

/// Photo arguments shared by the url-producing commands.
#[derive(clap::Args, Clone)]
struct PhotoArgs {
    /// Public ids of the uploaded photos, in slot order
    photos: Vec<String>,

    /// Caption label (rendered as "<label> – Holiday <year>")
    #[arg(long)]
    label: String,

    /// Override the caption year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "collage-card")]
#[command(about = "Build shareable collage URLs from uploaded photos")]
#[command(long_about = "\
Build shareable collage URLs from uploaded photos

Five photos are arranged into a fixed 3-column masonry over a 1600x900
canvas, with a semi-transparent caption ribbon along the bottom edge. The
output is a single delivery URL for the configured hosting service; nothing
is rendered locally.

Photo ids are the public identifiers issued by the hosting service at
upload time, given in slot order:

  collage-card build a b c d e --label Smith

Slot order is column-major, left to right, top to bottom:

  ┌─────┐ ┌─────┐ ┌─────┐
  │     │ │  2  │ │  4  │
  │  1  │ ├─────┤ ├─────┤
  │     │ │  3  │ │  5  │
  └─────┘ └─────┘ └─────┘

Run 'collage-card gen-config' to generate a documented collage.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, default_value = "collage.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a collage and print its delivery URL
    Build(PhotoArgs),
    /// Build a collage and print the full plan as JSON
    Plan(PhotoArgs),
    /// Print the computed slot geometry for the configured layout
    Slots,
    /// Load and validate the config, reporting effective values
    Check,
    /// Print a stock collage.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => {
            let cfg = config::load_config(&cli.config)?;
            let plan = build_plan(&cfg, &args)?;
            for line in output::build_report(&plan, cfg.layout.pattern.len()) {
                println!("{line}");
            }
        }
        Command::Plan(args) => {
            let cfg = config::load_config(&cli.config)?;
            let plan = build_plan(&cfg, &args)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Slots => {
            let cfg = config::load_config(&cli.config)?;
            let slots = layout::compute_slots(&cfg.layout);
            for line in output::slot_lines(&slots, cfg.layout.pattern.len()) {
                println!("{line}");
            }
        }
        Command::Check => {
            let cfg = config::load_config(&cli.config)?;
            if cfg.service.cloud_name.is_empty() {
                println!("Account: (unconfigured — set service.cloud_name)");
            } else {
                println!("Account: {}", cfg.service.cloud_name);
            }
            println!("Host: {}", cfg.service.host);
            println!(
                "Layout: {}x{} canvas, {} columns, {} photos",
                cfg.layout.canvas[0],
                cfg.layout.canvas[1],
                cfg.layout.pattern.len(),
                cfg.layout.slot_count(),
            );
            println!("Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve CLI photo args into a plan, defaulting the year at this
/// boundary. Display URLs are derived from the config's delivery host.
fn build_plan(
    cfg: &config::CollageConfig,
    args: &PhotoArgs,
) -> Result<builder::CollagePlan, builder::BuildError> {
    let photos: Vec<types::PhotoRef> = args
        .photos
        .iter()
        .map(|id| {
            let display = format!(
                "https://{}/{}/image/upload/{}",
                cfg.service.host, cfg.service.cloud_name, id
            );
            types::PhotoRef::new(id.clone(), display)
        })
        .collect();
    let year = args.year.unwrap_or_else(builder::current_year);
    builder::build_plan(cfg, &photos, &args.label, year)
}
