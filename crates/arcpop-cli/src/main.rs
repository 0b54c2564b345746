use arcpop::render::{LayoutOptions, SvgRenderOptions, layout_popup, render_chart_svg};
use arcpop::{AttributeMap, PopupConfig, PopupInfo, StripOptions};
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Popup(arcpop::Error),
    Render(arcpop::render::HeadlessError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Popup(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<arcpop::Error> for CliError {
    fn from(value: arcpop::Error) -> Self {
        Self::Popup(value)
    }
}

impl From<arcpop::render::HeadlessError> for CliError {
    fn from(value: arcpop::render::HeadlessError) -> Self {
        Self::Render(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Resolve,
    Strip,
    Runs,
    Chart,
    Popup,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ChartFormat {
    #[default]
    Svg,
    Json,
}

impl FromStr for ChartFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    configs: Vec<String>,
    overrides: Vec<String>,
    attributes: Option<String>,
    info: Option<String>,
    kind: Option<String>,
    fields: Option<String>,
    format: ChartFormat,
    chart_id: Option<String>,
    background: Option<String>,
    out: Option<String>,
    pretty: bool,
    layout: bool,
    verbose: bool,
    no_escape_braces: bool,
    trim: bool,
    decode_entities: bool,
}

fn usage() -> &'static str {
    "arcpop-cli\n\
\n\
USAGE:\n\
  arcpop-cli [resolve] --attributes <path> [<path>|-]\n\
  arcpop-cli strip [--no-escape-braces] [--trim] [--decode-entities] [<path>|-]\n\
  arcpop-cli runs [--pretty] [<path>|-]\n\
  arcpop-cli chart --kind bar|column|line|pie --fields <A,B[_::_NORM]> [--format svg|json] [--pretty] [--id <chart-id>] [--background <css-color>] [--out <path>] [<path>|-]\n\
  arcpop-cli popup --info <path> [--layout] [--pretty] [<path>|-]\n\
\n\
GLOBAL OPTIONS:\n\
  --config <path>   JSON document with `strip.*` and `chart.*` overrides (repeatable;\n\
                    later files win)\n\
  --set <key=value> override one dotted key after all config files (repeatable;\n\
                    the value is JSON when it parses, otherwise a string)\n\
  --verbose         log at debug level (otherwise RUST_LOG, default warn)\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - resolve reads a template and prints it with `{FIELD}` references filled in.\n\
  - chart and popup read the feature attributes (a JSON object) from <path>.\n\
  - chart prints SVG to stdout by default; use --out to write a file.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        let mut value = || it.next().cloned().ok_or(CliError::Usage(usage()));
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "resolve" => args.command = Command::Resolve,
            "strip" => args.command = Command::Strip,
            "runs" => args.command = Command::Runs,
            "chart" => args.command = Command::Chart,
            "popup" => args.command = Command::Popup,
            "--pretty" => args.pretty = true,
            "--layout" => args.layout = true,
            "--verbose" | "-v" => args.verbose = true,
            "--no-escape-braces" => args.no_escape_braces = true,
            "--trim" => args.trim = true,
            "--decode-entities" => args.decode_entities = true,
            "--config" => args.configs.push(value()?),
            "--set" => args.overrides.push(value()?),
            "--attributes" => args.attributes = Some(value()?),
            "--info" => args.info = Some(value()?),
            "--kind" => args.kind = Some(value()?),
            "--fields" => args.fields = Some(value()?),
            "--format" => {
                args.format = value()?
                    .parse::<ChartFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--id" => args.chart_id = Some(value()?),
            "--background" => {
                let bg = value()?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => args.out = Some(value()?),
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    let missing = match args.command {
        Command::Resolve => args.attributes.is_none(),
        Command::Chart => args.kind.is_none() || args.fields.is_none(),
        Command::Popup => args.info.is_none(),
        Command::Strip | Command::Runs => false,
    };
    if missing {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn read_config(paths: &[String], overrides: &[String]) -> Result<PopupConfig, CliError> {
    let mut config = PopupConfig::empty_object();
    for path in paths {
        config.merge(&PopupConfig::from_json_str(&std::fs::read_to_string(path)?)?);
    }
    for assignment in overrides {
        config.apply_override(assignment)?;
    }
    Ok(config)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn strip_options(args: &Args, config: &PopupConfig) -> StripOptions {
    let mut opts = StripOptions::from_config(config);
    if args.no_escape_braces {
        opts.escape_braces = false;
    }
    if args.trim {
        opts.trim = true;
    }
    if args.decode_entities {
        opts.decode_entities = true;
    }
    opts
}

fn run(args: Args) -> Result<(), CliError> {
    let config = read_config(&args.configs, &args.overrides)?;
    let text = read_input(args.input.as_deref())?;
    tracing::debug!(command = ?args.command, bytes = text.len(), "read input");

    match args.command {
        Command::Resolve => {
            let path = args.attributes.as_deref().ok_or(CliError::Usage(usage()))?;
            let attributes = AttributeMap::from_json_str(&std::fs::read_to_string(path)?)?;
            let template = text.trim_end_matches(['\r', '\n']);
            if let Some(resolved) = arcpop::resolve_template(Some(&attributes), Some(template)) {
                println!("{resolved}");
            }
            Ok(())
        }
        Command::Strip => {
            let opts = strip_options(&args, &config);
            println!("{}", arcpop::strip_to_plain_text_with(&text, &opts));
            Ok(())
        }
        Command::Runs => write_json(&arcpop::to_styled_runs(&text), args.pretty),
        Command::Chart => {
            let (Some(kind), Some(fields)) = (args.kind.as_deref(), args.fields.as_deref()) else {
                return Err(CliError::Usage(usage()));
            };
            let options = LayoutOptions::from_config(&config);
            let layout = arcpop::render::layout_chart_from_json(kind, fields, &text, &options)?;
            match args.format {
                ChartFormat::Json => write_json(&layout, args.pretty),
                ChartFormat::Svg => {
                    let svg_options = SvgRenderOptions {
                        chart_id: args.chart_id.as_deref().map(arcpop::render::sanitize_chart_id),
                        background: args.background.clone(),
                        include_tooltips: true,
                    };
                    write_text(&render_chart_svg(&layout, &svg_options), args.out.as_deref())
                }
            }
        }
        Command::Popup => {
            let path = args.info.as_deref().ok_or(CliError::Usage(usage()))?;
            let info = PopupInfo::from_json_str(&std::fs::read_to_string(path)?)?;
            let attributes = AttributeMap::from_json_str(&text)?;
            let content = arcpop::build_popup(&info, Some(&attributes));
            if args.layout {
                let layout = layout_popup(&content, &LayoutOptions::from_config(&config));
                write_json(&layout, args.pretty)
            } else {
                write_json(&content, args.pretty)
            }
        }
    }
}

fn main() {
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

    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
