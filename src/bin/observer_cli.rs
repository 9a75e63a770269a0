use bounded_observer::constants::{
    CLOSURE_REFERENCE_SCALE, DEFAULT_ITEM_HEIGHT_PX, DEFAULT_RANGE_SIZE, DEFAULT_TARGET_INDEX,
    DEFAULT_VIEWPORT_HEIGHT_PX, DEFAULT_VIEWPORT_ITEMS, RESTORATION_CONST,
};
use bounded_observer::{
    default_candidates, default_scales, project_checked, render_text, run_simulation,
    scale_invariance, constant_uniqueness, visible_range, ClosureRow, ScanOutcome,
    SimulationReport, UniquenessRow, Viewport, VisibleRange,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;

#[derive(Parser)]
#[command(name = "observer-cli")]
#[command(version)]
#[command(about = "Linear scan versus closed-form tangent projection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate a target index with both methods
    Simulate {
        /// Size of the index range
        #[arg(short = 'n', long, env = "OBSERVER_RANGE_SIZE", default_value_t = DEFAULT_RANGE_SIZE)]
        range_size: u64,

        /// Index to locate
        #[arg(short = 't', long, env = "OBSERVER_TARGET", default_value_t = DEFAULT_TARGET_INDEX)]
        target: u64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: SimulateOutput,

        /// Fail instead of printing a non-finite projection
        #[arg(long)]
        strict: bool,
    },

    /// Measure the closure gap of the projection across scales
    Closure {
        /// Scales to measure (defaults to 1e3, 1e6, 1e9, 1e12, 1e15)
        #[arg(short = 's', long, value_delimiter = ',')]
        scales: Vec<f64>,

        /// Scale used to compare candidate restoration factors
        #[arg(long, default_value_t = CLOSURE_REFERENCE_SCALE)]
        reference_scale: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: ClosureOutput,
    },

    /// Find the rows visible in a scrolled list without walking it
    Viewport {
        /// Number of rows in the list
        #[arg(long, default_value_t = DEFAULT_VIEWPORT_ITEMS)]
        items: u64,

        /// Row height (pixels)
        #[arg(long, default_value_t = DEFAULT_ITEM_HEIGHT_PX)]
        item_height: f64,

        /// Visible window height (pixels)
        #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT_PX)]
        viewport_height: f64,

        /// Scroll offset (pixels); defaults to the middle of the content
        #[arg(long)]
        scroll: Option<f64>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: SimulateOutput,
    },

    /// Display program information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SimulateOutput {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClosureOutput {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
struct ClosureResult {
    restoration_factor: f64,
    scales: Vec<ClosureRow>,
    reference_scale: f64,
    candidates: Vec<UniquenessRow>,
}

#[derive(Debug, Serialize)]
struct ViewportResult {
    viewport: Viewport,
    visible: VisibleRange,
}

fn main() -> Result<(), Box<dyn Error>> {
    bounded_observer::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            range_size,
            target,
            output,
            strict,
        } => {
            if strict {
                project_checked(range_size, target)?;
            }
            let report = run_simulation(range_size, target);
            display_simulation(&report, output)?;
        }

        Commands::Closure {
            scales,
            reference_scale,
            output,
        } => {
            let scales = if scales.is_empty() { default_scales() } else { scales };
            let result = ClosureResult {
                restoration_factor: RESTORATION_CONST,
                scales: scale_invariance(&scales, RESTORATION_CONST)?,
                reference_scale,
                candidates: constant_uniqueness(reference_scale, &default_candidates())?,
            };
            display_closure(&result, output)?;
        }

        Commands::Viewport {
            items,
            item_height,
            viewport_height,
            scroll,
            output,
        } => {
            let viewport = Viewport {
                total_items: items,
                item_height,
                viewport_height,
                scroll_y: scroll.unwrap_or_else(|| Viewport::middle_scroll(items, item_height)),
            };
            let visible = visible_range(&viewport)?;
            display_viewport(&ViewportResult { viewport, visible }, output)?;
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║       BOUNDED OBSERVER v{:<8}       ║", env!("CARGO_PKG_VERSION"));
            println!("╠════════════════════════════════════════╣");
            println!("║ Locate an index in a large range by    ║");
            println!("║ projection instead of iteration.       ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Commands:                              ║");
            println!("║ • simulate  linear scan vs projection  ║");
            println!("║ • closure   restoration gap benchmark  ║");
            println!("║ • viewport  inverse projection         ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_simulation(report: &SimulationReport, format: SimulateOutput) -> Result<(), Box<dyn Error>> {
    match format {
        SimulateOutput::Table => {
            let stdout = std::io::stdout();
            render_text(report, &mut stdout.lock())?;
        }
        SimulateOutput::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }

    if let ScanOutcome::NotFound { .. } = report.scan {
        tracing::info!(target_index = report.target, "target outside the scanned range");
    }
    Ok(())
}

fn display_closure(result: &ClosureResult, format: ClosureOutput) -> Result<(), Box<dyn Error>> {
    match format {
        ClosureOutput::Table => {
            println!("1. SCALE INVARIANCE (restoration factor {:.7})", result.restoration_factor);
            println!("┌──────────┬──────────────┬────────┐");
            println!("│ Scale    │ Gap          │ Closed │");
            println!("├──────────┼──────────────┼────────┤");
            for row in &result.scales {
                println!("│ {:<8.0e} │ {:>12.4e} │ {:<6} │",
                    row.scale, row.gap, if row.closed { "yes" } else { "no" });
            }
            println!("└──────────┴──────────────┴────────┘");

            println!();
            println!("2. CONSTANT UNIQUENESS (scale {:.0e})", result.reference_scale);
            println!("┌────────────────────┬──────────────┬──────────┐");
            println!("│ Candidate          │ Gap          │ vs. 1.0  │");
            println!("├────────────────────┼──────────────┼──────────┤");
            for row in &result.candidates {
                println!("│ {:<18} │ {:>12.4e} │ {:>7.4}x │",
                    row.name, row.gap, row.ratio_to_control);
            }
            println!("└────────────────────┴──────────────┴──────────┘");
        }

        ClosureOutput::Csv => {
            println!("kind,name,scale,factor,gap,closed,ratio_to_control");
            for row in &result.scales {
                println!("scale,,{:e},{},{:e},{},",
                    row.scale, result.restoration_factor, row.gap, row.closed);
            }
            for row in &result.candidates {
                println!("candidate,{},{:e},{},{:e},,{}",
                    row.name, result.reference_scale, row.factor, row.gap, row.ratio_to_control);
            }
        }

        ClosureOutput::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }

    Ok(())
}

fn display_viewport(result: &ViewportResult, format: SimulateOutput) -> Result<(), Box<dyn Error>> {
    match format {
        SimulateOutput::Table => {
            let v = &result.viewport;
            println!("--- NAVIGATING {} ITEMS ---", v.total_items);
            println!();
            println!("Total Scroll Height: {:e} pixels", v.content_height());
            println!("Current Scroll Y:    {:e} pixels", v.scroll_y);
            println!();
            println!("Visible Range: [{}, {}]", result.visible.start_index, result.visible.end_index);
            println!("Items to Render: {}", result.visible.len());
            println!("Distance from exact center: {} items", result.visible.distance_from_center);
        }
        SimulateOutput::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }

    Ok(())
}
