use journeydoc_core::{JourneyGraph, export, samples};
use journeydoc_render::{RasterOptions, layout_flowchart, render_flowchart_svg};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Core(journeydoc_core::Error),
    Render(journeydoc_render::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Core(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<journeydoc_core::Error> for CliError {
    fn from(value: journeydoc_core::Error) -> Self {
        Self::Core(value)
    }
}

impl From<journeydoc_render::Error> for CliError {
    fn from(value: journeydoc_render::Error) -> Self {
        Self::Render(value)
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Chart,
    Samples,
}

#[derive(Debug, Clone, Copy, Default)]
enum ChartFormat {
    Svg,
    #[default]
    Png,
}

impl FromStr for ChartFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(()),
        }
    }
}

#[derive(Debug)]
struct Args {
    command: Command,
    format: ChartFormat,
    scale: f32,
    out: Option<String>,
    out_dir: PathBuf,
}

const DEFAULT_CHART_OUT: &str = "fertility_ai_flowchart.png";

fn usage() -> &'static str {
    "journeydoc\n\
\n\
USAGE:\n\
  journeydoc chart [--format svg|png] [--scale <n>] [--out <path>]\n\
  journeydoc samples [--out-dir <dir>]\n\
\n\
NOTES:\n\
  - chart renders the FertilityAI user-journey flowchart.\n\
  - PNG output defaults to ./fertility_ai_flowchart.png; SVG prints to stdout\n\
    unless --out is given.\n\
  - samples writes the conversation/usage/capability JSON and CSV files into\n\
    --out-dir (default: the working directory), overwriting existing files.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut it = argv.iter().skip(1).peekable();
    let command = match it.next().map(String::as_str) {
        Some("chart") => Command::Chart,
        Some("samples") => Command::Samples,
        Some("--help") | Some("-h") | None => return Err(CliError::Usage(usage())),
        Some(_) => return Err(CliError::Usage(usage())),
    };

    let mut args = Args {
        command,
        format: ChartFormat::default(),
        scale: 1.0,
        out: None,
        out_dir: PathBuf::from("."),
    };

    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<ChartFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.scale.is_finite() && args.scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--out-dir" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out_dir = PathBuf::from(dir);
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    Ok(args)
}

fn run_chart(args: &Args) -> Result<(), CliError> {
    let graph = JourneyGraph::fertility_ai();
    let layout = layout_flowchart(&graph)?;
    let svg = render_flowchart_svg(&layout);

    match args.format {
        ChartFormat::Svg => match args.out.as_deref() {
            None => print!("{svg}"),
            Some(path) => {
                std::fs::write(path, &svg)?;
                println!("Chart saved as {path}");
            }
        },
        ChartFormat::Png => {
            let raster = RasterOptions {
                scale: args.scale,
                ..Default::default()
            };
            let bytes = journeydoc_render::png_from_svg(&svg, &raster)
                .map_err(journeydoc_render::Error::Raster)?;
            let out = args.out.as_deref().unwrap_or(DEFAULT_CHART_OUT);
            std::fs::write(out, bytes)?;
            println!("Chart saved as {out}");
        }
    }
    Ok(())
}

fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_samples(args: &Args) -> Result<(), CliError> {
    std::fs::create_dir_all(&args.out_dir)?;
    let written = export::export_all(&args.out_dir)?;

    let conversations = samples::conversation_examples();
    let patterns = samples::interaction_patterns();
    let capabilities = samples::advanced_capabilities();

    println!("Advanced User Interaction Examples Created!");
    println!("{}", "=".repeat(50));

    println!("\n📱 Interactive Features Demonstrated:");
    for feature in &patterns.feature_usage {
        println!(
            "  • {}: {}% usage rate, {}/5.0 satisfaction",
            feature.feature, feature.usage_rate, feature.satisfaction
        );
    }

    println!("\n🗣️ Conversation Types Supported:");
    for (conv_type, examples) in &conversations {
        println!(
            "  • {}: {} interaction examples",
            title_case(conv_type),
            examples.len()
        );
    }

    println!("\n🤖 Advanced AI Capabilities:");
    for (category, areas) in &capabilities {
        println!("  • {}: {} capability areas", title_case(category), areas.len());
    }

    println!("\n📊 User Journey Analysis:");
    for stage in &patterns.user_journey_stages {
        println!(
            "  • {}: {} duration, {} avg interactions",
            stage.stage, stage.duration_days, stage.interactions
        );
    }

    println!("\nFiles created:");
    for path in &written {
        println!("• {}", path.display());
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    tracing::debug!(command = ?args.command, "journeydoc invoked");
    match args.command {
        Command::Chart => run_chart(&args),
        Command::Samples => run_samples(&args),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
