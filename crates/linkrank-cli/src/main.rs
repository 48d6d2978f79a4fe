use linkrank::digraph::alg::{DirectedCycle, StrongComponents};
use linkrank::{AnalysisConfig, DiGraph, analyze, load_site, page_rank};
use serde::Serialize;
use std::io::Write;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Linkrank(linkrank::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Linkrank(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<linkrank::Error> for CliError {
    fn from(value: linkrank::Error) -> Self {
        Self::Linkrank(value)
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
    Stats,
    Components,
    Cycle,
    Rank,
    Report,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    json: bool,
    config: Option<String>,
    iterations: Option<usize>,
    alpha: Option<f64>,
    top: Option<usize>,
    marker: Option<String>,
}

#[derive(Serialize)]
struct StatsOut {
    pages: usize,
    links: usize,
}

#[derive(Serialize)]
struct ComponentsOut<'a> {
    count: usize,
    components: &'a [linkrank::analysis::ComponentReport],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CycleOut<'a> {
    has_cycle: bool,
    cycle: Option<&'a [String]>,
}

#[derive(Serialize)]
struct RankOut<'a> {
    ranks: &'a [linkrank::analysis::RankedPage],
    top: &'a [linkrank::analysis::RankedPage],
}

fn usage() -> &'static str {
    "linkrank-cli\n\
\n\
USAGE:\n\
  linkrank-cli [stats] [--json] [--pretty] [--marker <s>] <dir>\n\
  linkrank-cli components [--json] [--pretty] [--marker <s>] <dir>\n\
  linkrank-cli cycle [--json] [--pretty] [--marker <s>] <dir>\n\
  linkrank-cli rank [--iterations <n>] [--alpha <a>] [--top <n>] [--json] [--pretty] [--marker <s>] <dir>\n\
  linkrank-cli report [--iterations <n>] [--alpha <a>] [--top <n>] [--pretty] [--marker <s>] <dir>\n\
\n\
OPTIONS:\n\
  --config <path>   JSON settings file; flags given on the command line take precedence.\n\
\n\
NOTES:\n\
  - Every file directly inside <dir> is a page; lines containing the marker (default: href)\n\
    link to the first double-quoted string on the line.\n\
  - report always prints JSON.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "stats" => args.command = Command::Stats,
            "components" => args.command = Command::Components,
            "cycle" => args.command = Command::Cycle,
            "rank" => args.command = Command::Rank,
            "report" => args.command = Command::Report,
            "--pretty" => args.pretty = true,
            "--json" => args.json = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--iterations" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.iterations = Some(n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--alpha" => {
                let Some(alpha) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.alpha = Some(alpha.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--top" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.top = Some(n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--marker" => {
                let Some(marker) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.marker = Some(marker.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.input.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn effective_config(args: &Args) -> Result<AnalysisConfig, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(n) = args.iterations {
        config.rank.iterations = n;
    }
    if let Some(alpha) = args.alpha {
        config.rank.alpha = alpha;
    }
    if let Some(n) = args.top {
        config.top = n;
    }
    if let Some(marker) = &args.marker {
        config.link_marker = marker.clone();
    }
    config.validate()?;
    Ok(config)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn print_components(sc: &StrongComponents<String>) {
    println!("Components: \t{}", sc.number_of_components());
    print!("{sc}");
}

fn print_ranks(g: &DiGraph<String>, config: &AnalysisConfig) -> Result<(), CliError> {
    let table = page_rank(g, &config.rank)?;

    println!("Unsorted:");
    print!("{table}");

    println!("\n\nSorted:");
    for (page, score) in table.sorted_ascending() {
        println!("{page}: {score}");
    }

    println!("\n\nTop pages:");
    for (page, score) in table.top_n(config.top) {
        println!("{page}: {score}");
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let config = effective_config(&args)?;
    let Some(dir) = args.input.as_deref() else {
        return Err(CliError::Usage(usage()));
    };
    let g = load_site(dir, &config.link_marker)?;

    match args.command {
        Command::Stats => {
            if args.json {
                let out = StatsOut {
                    pages: g.number_of_vertices(),
                    links: g.number_of_edges(),
                };
                write_json(&out, args.pretty)?;
            } else {
                println!("Pages: \t{}", g.number_of_vertices());
                println!("Links: \t{}", g.number_of_edges());
            }
            Ok(())
        }
        Command::Components => {
            if args.json {
                let report = analyze(&g, &config)?;
                let out = ComponentsOut {
                    count: report.component_count,
                    components: &report.components,
                };
                write_json(&out, args.pretty)?;
            } else {
                print_components(&StrongComponents::new(&g));
            }
            Ok(())
        }
        Command::Cycle => {
            let dc = DirectedCycle::new(&g);
            if args.json {
                let out = CycleOut {
                    has_cycle: dc.has_cycle(),
                    cycle: dc.cycle(),
                };
                write_json(&out, args.pretty)?;
            } else {
                println!("{}", dc.has_cycle());
                if let Some(cycle) = dc.cycle() {
                    println!("{}", cycle.join(", "));
                }
            }
            Ok(())
        }
        Command::Rank => {
            if args.json {
                let report = analyze(&g, &config)?;
                let out = RankOut {
                    ranks: &report.ranks,
                    top: &report.top,
                };
                write_json(&out, args.pretty)?;
                Ok(())
            } else {
                print_ranks(&g, &config)
            }
        }
        Command::Report => {
            let report = analyze(&g, &config)?;
            write_json(&report, args.pretty)
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

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
