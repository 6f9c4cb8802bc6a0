use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use mathtex::{AngleMode, Context, parse_and_evaluate, parse_and_render, set_angle_mode,
              util::format::format_float};

/// mathtex evaluates a math expression, or typesets it as LaTeX.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable read as `$name`, e.g. `--var x=2.5`. May be repeated.
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Interprets trigonometric arguments in degrees instead of radians.
    #[arg(short, long)]
    degrees: bool,

    /// Prints the LaTeX form of the expression instead of its value.
    #[arg(short, long)]
    latex: bool,

    /// Raises the log level on stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    expression: String,
}

fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected NAME=VALUE, found '{binding}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

/// Writes every enabled record to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }

    if args.degrees {
        set_angle_mode(AngleMode::Degrees);
    }

    let output = if args.latex {
        parse_and_render(&args.expression)
    } else {
        let mut context = args.vars.into_iter().collect::<Context>();
        parse_and_evaluate(&args.expression, &mut context).map(format_float)
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
