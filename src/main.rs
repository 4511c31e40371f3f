use std::error::Error;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use crossterm::event::{Event, KeyCode, KeyEventKind};

use crate::graph::dijkstra::shortest_path;
use crate::graph::location::Location;
use crate::scenario::basic::BasicScenario;
use crate::scenario::brazil::{brazil_graph, capital};
use crate::scenario::random::RandomScenario;
use crate::simulation::engine::SimulationEngine;
use crate::tui::app::App;
use crate::tui::draw::draw_app;

mod graph;
mod scenario;
mod simulation;
mod tui;
mod vehicle;

#[derive(Parser)]
#[command(name = "routesim", about = "Turn-based freight simulator over the interstate map")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Scenario to run in the TUI.
    #[arg(long, value_enum, default_value_t = ScenarioKind::Basic)]
    scenario: ScenarioKind,

    /// Seed for the random scenario.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Subcommand)]
enum Command {
    /// Print the shortest route between two state codes and exit.
    Route { from: Location, to: Location },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScenarioKind {
    Basic,
    Random,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(Command::Route { from, to }) = cli.command {
        return run_route(from, to);
    }

    let (graph, fleet, scenario) = match cli.scenario {
        ScenarioKind::Basic => BasicScenario::build()?,
        ScenarioKind::Random => RandomScenario::build(cli.seed)?,
    };
    let engine = SimulationEngine::new(graph, fleet, scenario);

    let mut terminal = ratatui::init();
    let mut app = App::new(engine);

    loop {
        let _ = terminal.draw(|frame| draw_app(frame, &app));

        if crossterm::event::poll(Duration::from_millis(16))? {
            match crossterm::event::read()? {
                Event::Key(key)
                    if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('q') =>
                {
                    break;
                }
                Event::Key(key)
                    if key.kind == KeyEventKind::Press && key.code == KeyCode::Char(' ') =>
                {
                    app.engine.step()?
                }
                _ => continue,
            }
        }
    }
    Ok(())
}

fn run_route(from: Location, to: Location) -> Result<(), Box<dyn Error>> {
    let graph = brazil_graph()?;
    let start = capital(&graph, from)?;
    let destination = capital(&graph, to)?;

    // equal endpoints produce the self-loop path, which never ends when
    // walked; answer directly instead
    if from == to {
        println!("{from}: already there");
        return Ok(());
    }

    match shortest_path(start, destination, &graph)? {
        None => println!("no route from {from} to {to}"),
        Some(path) => {
            let mut total = 0;
            let mut current = start;
            print!("{from}");
            for next in path.walk(None) {
                total += graph
                    .find_edge(current.location(), next.location())
                    .map_or(0, |e| e.weight());
                print!(" -> {}", next.location());
                current = next;
            }
            println!("  (total weight {total})");
        }
    }
    Ok(())
}
