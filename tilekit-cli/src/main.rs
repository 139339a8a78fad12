use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use serde::{Deserialize, Serialize};
use tilekit_chart::donut::{DonutChart, DonutChartConfig, DonutChartLayout};
use tilekit_chart::legend::LegendLayout;
use tilekit_chart::ring::ChartDatum;
use tilekit_common::color::parse_color;
use tilekit_scales::axis::{AxisScale, AxisScaler, AxisScalerConfig};
use tilekit_text::measurement::approximate::ApproximateTextMeasurer;

/// Compute dashboard tile chart layouts and axis scales as JSON
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a donut chart from a JSON array of `{name, value, color}` items
    Ring {
        /// Path to the JSON data file, or `-` to read from stdin
        input: String,

        /// Side length of the square chart canvas in pixels
        #[arg(short, long, default_value_t = 300.0)]
        size: f64,

        /// Font family used to fit the labels
        #[arg(long, default_value = "Lato")]
        font: String,

        /// Leave out the total in the middle of the ring
        #[arg(long)]
        no_sum: bool,
    },

    /// Compute a nice axis scale for the range [min, max]
    Scale {
        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        #[arg(long, allow_negative_numbers = true)]
        max: f64,

        /// Target number of major ticks
        #[arg(long, default_value_t = 10)]
        major_ticks: usize,

        /// Target number of minor ticks per major tick
        #[arg(long, default_value_t = 10)]
        minor_ticks: usize,
    },
}

/// Chart item as written in input files, with a CSS color string
#[derive(Debug, Deserialize)]
struct InputDatum {
    name: String,
    value: f64,
    color: String,
}

fn parse_chart_data(json: &str) -> anyhow::Result<Vec<ChartDatum>> {
    let items: Vec<InputDatum> = serde_json::from_str(json).context("invalid chart data")?;
    items
        .into_iter()
        .map(|item| {
            let color = parse_color(&item.color)
                .with_context(|| format!("invalid color for `{}`", item.name))?;
            Ok(ChartDatum::new(item.name, item.value, color))
        })
        .collect()
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        let path = PathBuf::from(input);
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
    }
}

#[derive(Serialize)]
struct RingOutput {
    chart: DonutChartLayout,
    legend: LegendLayout,
}

#[derive(Serialize)]
struct ScaleOutput {
    scale: AxisScale,
    major_ticks: Vec<f64>,
    minor_ticks: Vec<f64>,
}

fn run_ring(input: &str, size: f64, font: String, no_sum: bool) -> anyhow::Result<String> {
    let data = parse_chart_data(&read_input(input)?)?;
    info!("laying out {} chart items on a {size}px canvas", data.len());

    let chart = DonutChart::new(DonutChartConfig {
        font_family: font,
        sum_visible: !no_sum,
        ..Default::default()
    });
    let layout = chart.compute(&data, size, &ApproximateTextMeasurer::default())?;
    let legend = LegendLayout::compute(&data, size, size);

    Ok(serde_json::to_string_pretty(&RingOutput {
        chart: layout,
        legend,
    })?)
}

fn run_scale(min: f64, max: f64, config: AxisScalerConfig) -> anyhow::Result<String> {
    let scale = AxisScaler::new(config)?.scale(min, max)?;
    Ok(serde_json::to_string_pretty(&ScaleOutput {
        major_ticks: scale.major_ticks(),
        minor_ticks: scale.minor_ticks(),
        scale,
    })?)
}

fn main() -> anyhow::Result<()> {
    // Setup logger
    env_logger::init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Ring {
            input,
            size,
            font,
            no_sum,
        } => run_ring(&input, size, font, no_sum)?,
        Commands::Scale {
            min,
            max,
            major_ticks,
            minor_ticks,
        } => run_scale(
            min,
            max,
            AxisScalerConfig {
                max_major_ticks: major_ticks,
                max_minor_ticks: minor_ticks,
            },
        )?,
    };

    println!("{output}");
    Ok(())
}
