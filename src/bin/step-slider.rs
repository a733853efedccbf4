use std::{
    io::{BufWriter, Write as _},
    path::PathBuf,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use step_slider::{Size, Slider, SliderConfig, transit_schedule};

#[derive(Parser, Debug)]
#[command(name = "step-slider", version)]
struct Cli {
    /// Log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the transit pulse schedule for a jump as JSON.
    Schedule(ScheduleArgs),
    /// Run a transition frame by frame and print the result as JSON lines.
    Simulate(SimulateArgs),
    /// Print the default configuration as JSON.
    DefaultConfig,
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    /// Previously selected index.
    #[arg(long)]
    from: usize,

    /// Newly selected index.
    #[arg(long)]
    to: usize,

    /// Transition duration in milliseconds.
    #[arg(long, default_value_t = step_slider::DEFAULT_DURATION_MS)]
    duration_ms: u64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Slider configuration JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured point count.
    #[arg(long)]
    points: Option<usize>,

    /// Index to start from (overrides `initial_position`).
    #[arg(long)]
    from: Option<usize>,

    /// Index to select.
    #[arg(long)]
    to: usize,

    /// Frames per second of the simulated render loop.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Rendered point width and height.
    #[arg(long, default_value_t = 48.0)]
    point_size: f64,

    /// Line extent along the slider axis.
    #[arg(long, default_value_t = 480.0)]
    line_length: f64,

    /// Line extent across the slider axis.
    #[arg(long, default_value_t = 8.0)]
    line_thickness: f64,

    /// What to print per frame.
    #[arg(long, value_enum, default_value_t = Output::Summary)]
    output: Output,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Output {
    /// Frame count and final state only.
    Summary,
    /// One `Frame` JSON document per tick.
    Frames,
    /// One `TickReport` JSON document per tick.
    Reports,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Schedule(args) => cmd_schedule(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::DefaultConfig => cmd_default_config(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    if args.duration_ms == 0 {
        anyhow::bail!("--duration-ms must be > 0");
    }
    let schedule = transit_schedule(args.from, args.to, Duration::from_millis(args.duration_ms));
    println!("{}", serde_json::to_string_pretty(&schedule)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }

    let mut config = match &args.config {
        Some(path) => SliderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => SliderConfig::default(),
    };
    if let Some(points) = args.points {
        config.point_count = points;
    }
    if let Some(from) = args.from {
        config.initial_position = from;
    }

    let orientation = config.orientation;
    let mut slider = Slider::new(config).context("build slider")?;
    slider.resize_points(Size::new(args.point_size, args.point_size));
    slider.resize_line(match orientation {
        step_slider::Orientation::Horizontal => Size::new(args.line_length, args.line_thickness),
        step_slider::Orientation::Vertical => Size::new(args.line_thickness, args.line_length),
    });
    slider.set_listener(|index| tracing::info!(index, "selection changed"));
    slider
        .set_position(args.to)
        .with_context(|| format!("select point {}", args.to))?;

    let dt = Duration::from_secs(1) / args.fps;
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut frames = 0u64;
    loop {
        let report = slider.tick(dt);
        frames += 1;
        match args.output {
            Output::Summary => {}
            Output::Frames => {
                serde_json::to_writer(&mut out, &slider.frame())?;
                writeln!(out)?;
            }
            Output::Reports => {
                serde_json::to_writer(&mut out, &report)?;
                writeln!(out)?;
            }
        }
        if !report.animating {
            break;
        }
    }

    if let Output::Summary = args.output {
        let frame = slider.frame();
        writeln!(out, "frames: {frames}")?;
        writeln!(out, "elapsed_ms: {}", frame.clock_ms)?;
        writeln!(out, "selected: {} (from {})", frame.current, frame.previous)?;
        writeln!(out, "sweep: {}", frame.line.sweep)?;
    }
    out.flush()?;
    Ok(())
}

fn cmd_default_config() -> anyhow::Result<()> {
    println!("{}", SliderConfig::default().to_json_pretty()?);
    Ok(())
}
