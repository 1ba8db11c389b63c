// minic: line validator and statement extractor with a run viewer

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use minic::compiler::config::{CompilerConfig, FailurePolicy};
use minic::compiler::report::write_report;
use minic::compiler::session::Session;
use minic::ui::App;

struct Options {
    input: String,
    report: bool,
    config: CompilerConfig,
}

fn usage(program_name: &str) {
    eprintln!("Usage: {} <file> [options]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --report           Print a plain-text report instead of opening the viewer");
    eprintln!("  --keep-going       Record invalid lines and continue instead of stopping");
    eprintln!("  --max-symbols N    Symbol table capacity");
    eprintln!("  --max-depth N      Deepest parenthesis nesting allowed");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut input = None;
    let mut report = false;
    let mut config = CompilerConfig::default();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--report" => report = true,
            "--keep-going" => config = config.with_failure_policy(FailurePolicy::Continue),
            "--max-symbols" | "--max-depth" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("Missing value for {}", arg))?;
                let n: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid value for {}: '{}'", arg, value))?;
                config = if arg == "--max-symbols" {
                    config.with_max_symbols(n)
                } else {
                    config.with_max_nesting_depth(n)
                };
            }
            flag if flag.starts_with("--") => return Err(format!("Unknown option '{}'", flag)),
            path if input.is_none() => input = Some(path.to_string()),
            extra => return Err(format!("Unexpected argument '{}'", extra)),
        }
    }

    let input = input.ok_or_else(|| "No input file provided".to_string())?;
    Ok(Options {
        input,
        report,
        config,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("minic");

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            usage(program_name);
            std::process::exit(1);
        }
    };

    if !Path::new(&options.input).exists() {
        eprintln!("Error: File '{}' not found", options.input);
        std::process::exit(1);
    }

    let source = fs::read_to_string(&options.input)?;

    eprintln!("Compiling {}...", options.input);
    let mut session = Session::new(options.config);
    let outcome = session.run(&source);

    match &outcome {
        Ok(()) => {
            for error in session.diagnostics() {
                eprintln!("{}", error);
            }
            eprintln!(
                "Processed {} line(s): {} statement(s), {} variable(s), {} rejected.",
                session.history().len(),
                session.statements().len(),
                session.symbols().len(),
                session.diagnostics().len()
            );
        }
        Err(e) => eprintln!("Compilation stopped. {}", e),
    }

    if options.report {
        write_report(&session, &mut io::stdout().lock())?;
        if outcome.is_err() || session.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
