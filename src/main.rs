// linkview: step-through linked list workbench

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use linkview::script::command::Script;
use linkview::script::constants::DEFAULT_SNAPSHOT_LIMIT;
use linkview::script::runner::Runner;
use linkview::ui::App;

/// Built-in walkthrough used by `--demo`
const DEMO_SCRIPT: &str = include_str!("../demos/walkthrough.ll");

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <script.ll> [--plain]", program_name);
    eprintln!("       {} --demo [--plain]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --demo     Run the built-in linked list walkthrough");
    eprintln!("  --plain    Print the console output instead of opening the TUI");
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {} demos/walkthrough.ll     # Step through the walkthrough",
        program_name
    );
    eprintln!(
        "  {} --demo --plain           # Print the walkthrough narration",
        program_name
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("linkview");

    let plain = args.iter().skip(1).any(|a| a == "--plain");
    let demo = args.iter().skip(1).any(|a| a == "--demo");
    let script_path = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .cloned();

    if let Some(unknown) = args
        .iter()
        .skip(1)
        .find(|a| a.starts_with("--") && *a != "--plain" && *a != "--demo")
    {
        eprintln!("Error: Unknown option '{}'", unknown);
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    }

    let (source, source_name) = match (script_path, demo) {
        (Some(path), false) => {
            if !Path::new(&path).exists() {
                eprintln!("Error: File '{}' not found", path);
                print_usage(program_name);
                std::process::exit(1);
            }
            (fs::read_to_string(&path)?, path)
        }
        (None, true) => (DEMO_SCRIPT.to_string(), "built-in walkthrough".to_string()),
        (Some(_), true) => {
            eprintln!("Error: Pass either a script file or --demo, not both");
            std::process::exit(1);
        }
        (None, false) => {
            eprintln!("Error: No script provided");
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    eprintln!("Parsing {}...", source_name);
    let script = match Script::parse(&source) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    eprintln!("Parsed successfully. Found {} commands.", script.len());

    let mut runner = Runner::new(script, DEFAULT_SNAPSHOT_LIMIT);

    eprintln!("Executing script...");
    match runner.run() {
        Ok(()) => {
            eprintln!("Execution completed successfully.");
            eprintln!("Total snapshots: {}", runner.total_snapshots());
        }
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            if !plain {
                eprintln!("Entering TUI with partial execution history...");
            }
        }
    }

    if plain {
        for line in runner.console().output() {
            println!("{}", line);
        }
        if runner.error().is_some() {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Rewind to the beginning for TUI
    if let Err(e) = runner.rewind_to_start() {
        eprintln!("Warning: Failed to rewind to start: {}", e);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(runner, source);
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
