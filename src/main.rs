use clap::{Parser, Subcommand};
use docu_layout::config::{self, Overrides, StrategyKind};
use docu_layout::layout::{self, FsStorage};
use docu_layout::outline::{self, Outline};
use docu_layout::output;
use docu_layout::tracker::OutputTracker;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docu-layout")]
#[command(about = "Lay out an outline of pages as a Docusaurus docs tree")]
#[command(long_about = "\
Lay out an outline of pages as a Docusaurus docs tree

Each outline level becomes a directory with a _category_.json sidecar that
records its sidebar position and label. Each page is written as a markdown
file named after its slug or title.

Outline format (JSON):

  {
    \"children\": [
      { \"level\": { \"label\": \"Getting Started\", \"children\": [
          { \"page\": { \"id\": \"a1\", \"title\": \"Install\", \"body\": \"...\" } }
      ] } },
      { \"page\": { \"id\": \"b2\", \"title\": \"FAQ\", \"slug\": \"/faq\" } }
    ]
  }

Resulting tree (hierarchical strategy):

  docs/
  ├── getting-started/
  │   ├── _category_.json          {\"position\":1,\"label\":\"Getting Started\"}
  │   └── Install.md
  └── faq.md

Run 'docu-layout gen-config' to generate a documented docu-layout.toml.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = stock defaults)
    #[arg(long, default_value = config::CONFIG_FILENAME, global = true)]
    config: PathBuf,

    /// Output root directory (overrides output_root)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Layout strategy (overrides strategy)
    #[arg(long, value_enum, global = true)]
    strategy: Option<StrategyKind>,

    /// Page file extension with leading dot (overrides extension)
    #[arg(long, global = true)]
    extension: Option<String>,

    /// Log progress at info level (otherwise RUST_LOG decides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create directories, category sidecars and page files from an outline
    Layout {
        /// Outline JSON file
        outline: PathBuf,
        /// Delete previously generated pages that this run did not produce
        #[arg(long)]
        clean: bool,
    },
    /// Print where every level and page would go, without writing anything
    Plan {
        /// Outline JSON file
        outline: PathBuf,
    },
    /// Print a stock docu-layout.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let clean = matches!(cli.command, Command::Layout { clean: true, .. });
    let overrides = Overrides {
        output_root: cli.output,
        strategy: cli.strategy,
        extension: cli.extension,
        clean_stale: clean,
    };

    match cli.command {
        Command::Layout { outline, .. } => {
            let config = config::load_config(&cli.config)?.with_overrides(overrides)?;
            let outline = Outline::load(&outline)?;
            let strategy = layout::from_config(&config);

            let mut tracker = config
                .clean_stale
                .then(|| OutputTracker::scan(strategy.root().as_path()));
            let mut report = outline::drive(
                &outline,
                strategy.as_ref(),
                &FsStorage,
                &config.extension,
                tracker.as_mut(),
            )?;
            if let Some(tracker) = tracker {
                report.removed = tracker.cleanup()?;
            }
            output::print_layout_output(&report, strategy.root(), false);
        }
        Command::Plan { outline } => {
            let config = config::load_config(&cli.config)?.with_overrides(overrides)?;
            let outline = Outline::load(&outline)?;
            let strategy = layout::from_config(&config);
            let report = outline::plan(&outline, strategy.as_ref(), &config.extension)?;
            output::print_layout_output(&report, strategy.root(), true);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `--verbose` enables INFO level, otherwise use RUST_LOG or default to WARN.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
