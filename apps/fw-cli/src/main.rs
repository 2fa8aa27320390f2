use clap::{Parser, Subcommand, ValueEnum};
use fw_eos::{
    EosResult, EquationOfState, Property, SweepAxis, SweepDefinition, SweepType, ValidityRange,
    execute_sweep, load_profile,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fw-cli")]
#[command(about = "Freshwater CLI - lake water equation of state (Chen & Millero 1986)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate properties at a single state
    Eval {
        /// Temperature [°C]
        #[arg(long, allow_negative_numbers = true)]
        t: f64,
        /// Salinity [g/kg]
        #[arg(long, default_value_t = 0.0)]
        s: f64,
        /// Gauge pressure [bar]
        #[arg(long, default_value_t = 0.0)]
        p: f64,
        /// Single property to print (density, alpha, tmd, sound_speed, heat_capacity, freezing_point)
        #[arg(long)]
        property: Option<Property>,
    },
    /// Evaluate every sample of a profile file (YAML or JSON)
    Profile {
        /// Path to the profile file
        profile_path: PathBuf,
        /// Output format for the report
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Sweep one input and print a two-column table
    Sweep {
        /// Input to vary
        #[arg(long, value_enum)]
        axis: AxisArg,
        #[arg(long, allow_negative_numbers = true)]
        start: f64,
        #[arg(long, allow_negative_numbers = true)]
        end: f64,
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Use logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Property to evaluate
        #[arg(long, default_value = "density")]
        property: Property,
        /// Fixed temperature [°C] when not swept
        #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
        t: f64,
        /// Fixed salinity [g/kg] when not swept
        #[arg(long, default_value_t = 0.0)]
        s: f64,
        /// Fixed gauge pressure [bar] when not swept
        #[arg(long, default_value_t = 0.0)]
        p: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    Temperature,
    Salinity,
    Pressure,
}

impl From<AxisArg> for SweepAxis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Temperature => SweepAxis::Temperature,
            AxisArg::Salinity => SweepAxis::Salinity,
            AxisArg::Pressure => SweepAxis::Pressure,
        }
    }
}

fn main() -> EosResult<()> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let eos = EquationOfState::new();

    match cli.command {
        Commands::Eval { t, s, p, property } => cmd_eval(&eos, t, s, p, property),
        Commands::Profile {
            profile_path,
            format,
        } => cmd_profile(&eos, &profile_path, format),
        Commands::Sweep {
            axis,
            start,
            end,
            points,
            log,
            property,
            t,
            s,
            p,
        } => {
            let sweep_type = if log {
                SweepType::Logarithmic
            } else {
                SweepType::Linear
            };
            let sweep = SweepDefinition::new(start, end, points, sweep_type)?;
            cmd_sweep(&eos, &sweep, axis.into(), (t, s, p), property)
        }
    }
}

fn cmd_eval(
    eos: &EquationOfState,
    t: f64,
    s: f64,
    p: f64,
    property: Option<Property>,
) -> EosResult<()> {
    if !ValidityRange::CHEN_MILLERO_1986.contains(t, s, p) {
        tracing::warn!(t, s, p, "state outside fitted range; values are extrapolated");
    }

    match property {
        Some(prop) => println!("{}", eos.evaluate(prop, t, s, p)),
        None => {
            println!("State: t = {} °C, s = {} g/kg, p = {} bar", t, s, p);
            for prop in Property::ALL {
                println!(
                    "  {:<15} {:>14.6e} {}",
                    prop.name(),
                    eos.evaluate(prop, t, s, p),
                    prop.unit()
                );
            }
        }
    }
    Ok(())
}

fn cmd_profile(eos: &EquationOfState, profile_path: &Path, format: OutputFormat) -> EosResult<()> {
    let profile = load_profile(profile_path)?;
    let report = profile.evaluate(eos);

    let out_of_range = report.rows.iter().filter(|row| !row.in_range).count();
    tracing::info!(
        profile = %report.name,
        samples = report.rows.len(),
        out_of_range,
        "evaluated profile"
    );

    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    println!("{}", text);
    Ok(())
}

fn cmd_sweep(
    eos: &EquationOfState,
    sweep: &SweepDefinition,
    axis: SweepAxis,
    base: (f64, f64, f64),
    property: Property,
) -> EosResult<()> {
    let result = execute_sweep(eos, sweep, axis, base, property)?;

    println!("# {}", sweep);
    println!("# {:<14} {} [{}]", axis, property, property.unit());
    for (x, y) in result.points() {
        println!("{:>16.6} {:>16.8e}", x, y);
    }
    Ok(())
}
