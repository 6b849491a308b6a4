//! glass-quote - CLI for quick estimates and itemized glazing quotes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use glass_quote::{
    build_quote, calculate_frame_cost, calculate_glass_cost, compute_area, compute_perimeter,
    parse_request_file, quick_estimate, validate_request, Finishing, FrameColor, FrameSpec,
    FrameSystem, GlassColor, GlassSpec, GlassType, MarkupRates, QuoteSheet,
};

/// Price glass, frames and installation for glazing projects.
#[derive(Parser, Debug)]
#[command(name = "glass-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ballpark price for a project type
    Estimate {
        /// Project type, e.g. sliding-window, pivot-door, front-shower-box
        #[arg(short, long)]
        project_type: String,
        /// Height in mm
        #[arg(long)]
        height: f64,
        /// Width in mm
        #[arg(long)]
        width: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Cost of one glass piece
    Glass {
        /// Glass type (tempered, laminated, plain, wired)
        #[arg(short = 't', long = "type", default_value = "tempered")]
        glass_type: GlassType,
        /// Thickness in mm
        #[arg(long, default_value = "6")]
        thickness: u8,
        /// Color (clear, smoke, green, bronze, ...)
        #[arg(short, long, default_value = "clear")]
        color: GlassColor,
        /// Finishing operation, repeatable
        #[arg(short, long)]
        finishing: Vec<Finishing>,
        /// Height in mm
        #[arg(long)]
        height: f64,
        /// Width in mm
        #[arg(long)]
        width: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Cost of the profiles around an opening
    Frame {
        /// Opening system (sliding, tilt-turn, pivot, ...)
        #[arg(short, long, default_value = "sliding")]
        system: FrameSystem,
        /// Profile line, e.g. "Line 25"
        #[arg(short, long, default_value = "Line 25")]
        line: String,
        /// Profile color (white, black, anodized, wood-grain)
        #[arg(short, long, default_value = "white")]
        color: FrameColor,
        /// Height in mm
        #[arg(long)]
        height: f64,
        /// Width in mm
        #[arg(long)]
        width: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Price a JSON quote request
    Quote {
        /// Input request file path
        #[arg(short, long)]
        input: PathBuf,
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Validate only, don't price
        #[arg(long)]
        validate: bool,
        /// Output the quote as JSON instead of a text sheet
        #[arg(long)]
        json: bool,
        /// Losses rate over subtotal
        #[arg(long)]
        losses: Option<f64>,
        /// Overhead rate over subtotal
        #[arg(long)]
        overhead: Option<f64>,
        /// Profit rate over cost total
        #[arg(long)]
        profit: Option<f64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Estimate {
            project_type,
            height,
            width,
            json,
        } => {
            warn_dimensions(height, width);
            let estimate = quick_estimate(&project_type, height, width);
            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("Area:      {:.4} m²", estimate.area);
                println!("Perimeter: {:.2} m", estimate.perimeter);
                println!("Estimate:  {:.2}", estimate.estimated_price);
                println!("Per m²:    {:.2}", estimate.price_per_m2);
            }
        }

        Command::Glass {
            glass_type,
            thickness,
            color,
            finishing,
            height,
            width,
            json,
        } => {
            warn_dimensions(height, width);
            let spec = GlassSpec {
                glass_type,
                thickness_mm: thickness,
                color,
                finishing,
            };
            for warning in glass_quote::validation::validate_glass_spec(&spec).warnings {
                warn!("{}", warning);
            }
            let cost = calculate_glass_cost(&spec, compute_area(height, width));
            if json {
                println!("{}", serde_json::to_string_pretty(&cost)?);
            } else {
                println!("Glass:     {}", spec.label());
                println!("Area:      {:.4} m²", cost.area);
                println!("Price/m²:  {:.2}", cost.price_per_m2);
                println!("Material:  {:.2}", cost.material_cost);
                println!("Finishing: {:.2}", cost.finishing_cost);
                println!("Total:     {:.2}", cost.total_price);
            }
        }

        Command::Frame {
            system,
            line,
            color,
            height,
            width,
            json,
        } => {
            warn_dimensions(height, width);
            let spec = FrameSpec::new(system, line, color, compute_perimeter(height, width));
            for warning in glass_quote::validation::validate_frame_spec(&spec).warnings {
                warn!("{}", warning);
            }
            let cost = calculate_frame_cost(&spec);
            if json {
                println!("{}", serde_json::to_string_pretty(&cost)?);
            } else {
                println!("Frame:     {}", spec.label());
                println!("Meters:    {:.2} + {:.2} extra", cost.linear_meters, cost.extra_material);
                println!("Price/m:   {:.2}", cost.price_per_meter);
                println!("Material:  {:.2}", cost.material_cost);
                println!("Labor:     {:.2}", cost.labor_cost);
                println!("Total:     {:.2}", cost.total_price);
            }
        }

        Command::Quote {
            input,
            output,
            validate,
            json,
            losses,
            overhead,
            profit,
        } => {
            info!("Processing: {}", input.display());

            let mut request = parse_request_file(&input)
                .with_context(|| format!("Failed to parse {}", input.display()))?;

            if losses.is_some() || overhead.is_some() || profit.is_some() {
                let base = request.markup.unwrap_or_default();
                request.markup = Some(MarkupRates::new(
                    losses.unwrap_or(base.losses),
                    overhead.unwrap_or(base.overhead),
                    profit.unwrap_or(base.profit),
                ));
            }

            // Validate
            let validation = validate_request(&request);

            for warning in &validation.warnings {
                warn!("{}", warning);
            }

            for err in &validation.errors {
                error!("{}", err);
            }

            if !validation.passed {
                anyhow::bail!("Validation failed");
            }

            // Validate-only mode
            if validate {
                info!("Validation passed");
                return Ok(());
            }

            let quote = build_quote(&request)?;
            info!(
                "Priced {} item(s), total {:.2}",
                quote.items.len(),
                quote.totals.grand_total
            );

            let rendered = if json {
                format!("{}\n", serde_json::to_string_pretty(&quote)?)
            } else {
                QuoteSheet(&quote).to_string()
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, &rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Generated: {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}

/// Calculators price invalid dimensions as zero; tell the user.
fn warn_dimensions(height: f64, width: f64) {
    let dimension = glass_quote::Dimension::new(height, width);
    for err in glass_quote::validation::validate_dimension(&dimension).errors {
        warn!("{}, priced as zero area", err);
    }
}
