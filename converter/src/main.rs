use airfoilcore::OutputFormat;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use workflow::config::ConversionConfig;
use workflow::runner::{Conversion, Runner};

mod plot;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Convert an airfoil for use in xfoil, or to SVG/DXF")]
struct Args {
    /// The airfoil file to convert, or - for stdin
    input: PathBuf,
    /// Output file name, or - for stdout
    output: PathBuf,
    /// Plot the airfoil (and its interpolated contour) to --plot-file
    #[arg(short, long, default_value_t = false)]
    plot: bool,
    /// Where the plot is written [default: airfoil-plot.svg]
    #[arg(long)]
    plot_file: Option<PathBuf>,
    /// Chord dimension in mm for DXF output [default: 100]
    #[arg(long)]
    chord: Option<f64>,
    /// Interpolate to N panels with xfoil while converting. Stock xfoil
    /// stops at about 350; custom builds allow more
    #[arg(short, long, value_name = "N")]
    interpolate: Option<usize>,
    /// Width of the SVG stroke [default: 10]
    #[arg(long)]
    stroke: Option<f64>,
    /// Output format [default: xfoil]
    #[arg(long, value_enum)]
    fmt: Option<Format>,
    /// The xfoil executable [default: xfoil]
    #[arg(long)]
    xfoil: Option<PathBuf>,
    /// Load conversion settings from YAML; flags given here take precedence
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Format {
    /// Two-column coordinates readable by xfoil.
    Xfoil,
    /// Unfilled stroked outline.
    Svg,
    /// Closed polyline on the AIRFOIL layer.
    Dxf,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Xfoil => OutputFormat::Xfoil,
            Format::Svg => OutputFormat::Svg,
            Format::Dxf => OutputFormat::Dxf,
        }
    }
}

impl Args {
    fn apply(&self, config: &mut ConversionConfig) {
        if self.plot {
            config.plot = true;
        }
        if let Some(path) = &self.plot_file {
            config.plot_file = path.clone();
        }
        if let Some(chord) = self.chord {
            config.chord = Some(chord);
        }
        if let Some(panels) = self.interpolate {
            config.interpolate = Some(panels);
        }
        if let Some(stroke) = self.stroke {
            config.stroke = stroke;
        }
        if let Some(format) = self.fmt {
            config.format = format.into();
        }
        if let Some(xfoil) = &self.xfoil {
            config.xfoil = xfoil.clone();
        }
    }

    fn resolve_config(&self) -> anyhow::Result<ConversionConfig> {
        let mut config = match &self.config {
            Some(path) => ConversionConfig::load(path)?,
            None => ConversionConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }
}

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

/// Renders the whole output before touching `output`, so a rejected stroke or
/// chord leaves no file behind.
fn write_output(runner: &Runner, conversion: &Conversion, output: &Path) -> anyhow::Result<()> {
    let mut rendered = Vec::new();
    runner.export(conversion, &mut rendered)?;

    if is_stdio(output) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(&rendered)?;
        out.flush()?;
    } else {
        fs::write(output, &rendered).with_context(|| format!("writing {}", output.display()))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.resolve_config()?;
    let runner = Runner::new(config.clone());

    let conversion = if is_stdio(&args.input) {
        runner.prepare(io::stdin().lock(), "stdin")?
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("opening {}", args.input.display()))?;
        runner.prepare(BufReader::new(file), &args.input.display().to_string())?
    };

    if config.plot {
        plot::write_preview(&config.plot_file, &conversion.snapshots())?;
        info!("plot written to {}", config.plot_file.display());
    }

    write_output(&runner, &conversion, &args.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_values() {
        let args = Args::parse_from([
            "airfoil", "in.dat", "-", "--fmt", "svg", "--stroke", "2.5", "-i", "200",
        ]);
        let mut config = ConversionConfig {
            chord: Some(30.0),
            ..Default::default()
        };
        args.apply(&mut config);
        assert_eq!(config.format, OutputFormat::Svg);
        assert_eq!(config.stroke, 2.5);
        assert_eq!(config.interpolate, Some(200));
        assert_eq!(config.chord, Some(30.0));
        assert!(!config.plot);
    }

    #[test]
    fn absent_flags_keep_defaults() {
        let args = Args::parse_from(["airfoil", "-", "-"]);
        assert!(is_stdio(&args.input) && is_stdio(&args.output));
        assert_eq!(args.resolve_config().unwrap(), ConversionConfig::default());
    }

    const SAMPLE: &str = "Sample\n1.0 0.0\n0.5 0.06\n0.0 0.0\n0.5 -0.04\n";

    fn rejected_output(config: ConversionConfig, name: &str) {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(name);
        let runner = Runner::new(config);
        let conversion = runner.prepare(SAMPLE.as_bytes(), "sample").unwrap();

        assert!(write_output(&runner, &conversion, &output).is_err());
        assert!(!output.exists(), "{} was created", output.display());
    }

    #[test]
    fn negative_stroke_creates_no_file() {
        rejected_output(
            ConversionConfig {
                format: OutputFormat::Svg,
                stroke: -1.0,
                ..Default::default()
            },
            "out.svg",
        );
    }

    #[test]
    fn zero_chord_creates_no_file() {
        rejected_output(
            ConversionConfig {
                format: OutputFormat::Dxf,
                chord: Some(0.0),
                ..Default::default()
            },
            "out.dxf",
        );
    }

    #[test]
    fn valid_output_is_written_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.dat");
        let runner = Runner::new(ConversionConfig::default());
        let conversion = runner.prepare(SAMPLE.as_bytes(), "sample").unwrap();

        write_output(&runner, &conversion, &output).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Sample\n  1.0 0.0\n  0.5 0.06\n  0.0 0.0\n  0.5 -0.04\n"
        );
    }

    #[test]
    fn unknown_format_fails_at_argument_parsing() {
        let result = Args::try_parse_from(["airfoil", "in.dat", "out.iges", "--fmt", "iges"]);
        assert!(result.is_err());
    }
}
