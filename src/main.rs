// algotty: a step-through data structures and algorithms visualizer

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algotty::engine::constants::{DEFAULT_ARRAY_SIZE, MAX_VALUE, MIN_VALUE};
use algotty::engine::{self, Algorithm};
use algotty::model::{generate_random_array, get_sorted_array, IdGen, Slot};
use algotty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotty");

    if args.len() < 2 {
        print_usage(program_name);
        std::process::exit(1);
    }

    if args[1] == "--list" || args[1] == "-l" {
        print_catalog();
        return Ok(());
    }

    let algorithm: Algorithm = match args[1].parse() {
        Ok(algorithm) => algorithm,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Run '{} --list' to see the available algorithms.", program_name);
            std::process::exit(1);
        }
    };

    let mut ids = IdGen::new();
    let mut rng = rand::thread_rng();

    // Input values: comma-separated, or a random array when omitted
    let mut snapshot: Vec<Slot> = match args.get(2) {
        Some(literal) => match parse_values(literal) {
            Ok(values) => values.into_iter().map(|v| Some(ids.element(v))).collect(),
            Err(token) => {
                eprintln!("Error: Invalid number '{}' in input values", token);
                std::process::exit(1);
            }
        },
        None => generate_random_array(DEFAULT_ARRAY_SIZE, MIN_VALUE, MAX_VALUE, &mut ids, &mut rng)
            .into_iter()
            .map(Some)
            .collect(),
    };

    let target: Option<i64> = match args.get(3) {
        Some(raw) => match raw.parse() {
            Ok(target) => Some(target),
            Err(_) => {
                eprintln!("Error: Invalid target '{}'", raw);
                std::process::exit(1);
            }
        },
        None => None,
    };

    // Binary search requires ascending input; sorting beforehand is the
    // caller's job, so the CLI does it here rather than inside the producer
    if algorithm == Algorithm::BinarySearch {
        snapshot = get_sorted_array(&snapshot);
    }

    eprintln!("Generating steps for {}...", algorithm);
    let steps = engine::algorithm_steps(algorithm, &snapshot, target, &mut rng);
    eprintln!("Generated {} steps.", steps.len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(algorithm.name().to_string(), steps);
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

fn parse_values(literal: &str) -> Result<Vec<i64>, String> {
    let mut values = Vec::new();
    for token in literal.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) => return Err(token.to_string()),
        }
    }
    Ok(values)
}

fn print_usage(program_name: &str) {
    eprintln!("Error: No algorithm provided");
    eprintln!();
    eprintln!("Usage: {} <algorithm> [values] [target]", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {} bubble-sort 8,3,15,6,12,1,9,4   # Sort a custom array",
        program_name
    );
    eprintln!(
        "  {} binary-search 1,3,5,7,9 7       # Search a sorted array for 7",
        program_name
    );
    eprintln!(
        "  {} quick-sort                      # Sort a random array",
        program_name
    );
    eprintln!();
    eprintln!("Run '{} --list' to see the full catalog.", program_name);
}

fn print_catalog() {
    println!("Available algorithms:");
    println!();
    for algorithm in Algorithm::ALL {
        let complexity = algorithm.complexity();
        println!(
            "  {:<18} {:<30} time {:<35} space {}",
            algorithm.slug(),
            algorithm.name(),
            complexity.time,
            complexity.space
        );
        println!("  {:<18} {}", "", algorithm.description());
        println!();
    }
}
