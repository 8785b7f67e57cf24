//! Command line tool for saturation vapor pressure.
use clap::{Parser, Subcommand, ValueEnum};
use metfor::{Celsius, Fahrenheit, HectoPascal, Kelvin, Quantity};
use sat_vapor_pressure::{Calculator, Formula, Phase, VaporPressureError};
use std::{io::IsTerminal, process::ExitCode};
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(name = "svp")]
#[command(about = "Saturation vapor pressure of water over liquid or ice", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the saturation vapor pressure (hPa) with one formula
    Compute {
        /// Temperature
        #[arg(allow_negative_numbers = true)]
        temperature: f64,
        /// Phase of water, liquid or ice
        #[arg(short, long, default_value = "liquid")]
        phase: String,
        /// Formula name, defaults to HylandWexler over liquid and GoffGratch over ice
        #[arg(short, long)]
        formula: Option<String>,
        /// Unit of the temperature
        #[arg(short, long, value_enum, default_value_t = Unit::C)]
        unit: Unit,
        /// Fail if the temperature is outside the documented range of the formula
        #[arg(long)]
        strict: bool,
        /// Fail instead of substituting Goff-Gratch for formulas without an equation for the phase
        #[arg(long)]
        no_substitution: bool,
    },
    /// Calculate the saturation vapor pressure (hPa) with every formula
    Compare {
        /// Temperature
        #[arg(allow_negative_numbers = true)]
        temperature: f64,
        /// Phase of water, liquid or ice
        #[arg(short, long, default_value = "liquid")]
        phase: String,
        /// Unit of the temperature
        #[arg(short, long, value_enum, default_value_t = Unit::C)]
        unit: Unit,
        /// Leave out formulas outside their documented range
        #[arg(long)]
        strict: bool,
    },
    /// List the formulas and their valid ranges
    Formulas,
}

#[derive(Clone, Copy, ValueEnum)]
enum Unit {
    /// Celsius
    C,
    /// Kelvin
    K,
    /// Fahrenheit
    F,
}

impl Unit {
    fn to_celsius(self, value: f64) -> Celsius {
        match self {
            Unit::C => Celsius(value),
            Unit::K => Celsius::from(Kelvin(value)),
            Unit::F => Celsius::from(Fahrenheit(value)),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compute {
            temperature,
            phase,
            formula,
            unit,
            strict,
            no_substitution,
        } => {
            let calc = Calculator::new()
                .with_strict_range(strict)
                .with_phase_substitution(!no_substitution);
            cmd_compute(&calc, unit.to_celsius(temperature), &phase, formula.as_deref())
                .map(|e| println!("{}", e.unpack()))
        }
        Commands::Compare {
            temperature,
            phase,
            unit,
            strict,
        } => {
            let calc = Calculator::new().with_strict_range(strict);
            cmd_compare(&calc, unit.to_celsius(temperature), &phase)
        }
        Commands::Formulas => {
            cmd_formulas();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn cmd_compute(
    calc: &Calculator,
    temperature: Celsius,
    phase: &str,
    formula: Option<&str>,
) -> Result<HectoPascal, VaporPressureError> {
    let phase = Phase::from_name(phase)?;
    let formula = match formula {
        Some(name) => Formula::from_name(name)?,
        None => Formula::default_for(phase),
    };

    calc.compute(temperature, phase, formula)
}

fn cmd_compare(
    calc: &Calculator,
    temperature: Celsius,
    phase: &str,
) -> Result<(), VaporPressureError> {
    let phase = Phase::from_name(phase)?;

    println!(
        "Saturation vapor pressure over {} at {:.2} C",
        phase,
        temperature.unpack()
    );
    for (formula, result) in calc.compare_formulas(temperature, phase) {
        match result {
            Ok(e) => println!("{:>18} {:>14.6} hPa", formula.to_string(), e.unpack()),
            Err(err) => println!("{:>18} {}", formula.to_string(), err),
        }
    }

    if let Some(spread) = calc.formula_spread(temperature, phase) {
        println!(
            "Spread {:.6} hPa, {} to {}",
            spread.range().unpack(),
            spread.min.0,
            spread.max.0
        );
    }

    Ok(())
}

fn cmd_formulas() {
    for formula in Formula::iter() {
        let ranges: Vec<String> = Phase::iter()
            .filter_map(|phase| {
                formula.valid_range(phase).map(|range| {
                    format!(
                        "{} {} C to {} C",
                        phase,
                        range.min.unpack(),
                        range.max.unpack()
                    )
                })
            })
            .collect();

        println!("{:>18}  {}", formula.to_string(), ranges.join(", "));
    }
}
