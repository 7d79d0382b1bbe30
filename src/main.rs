use std::env;
use std::process;

use clap::{App, Arg};
use prettytable::{Cell as TableCell, Row, Table};

use asteroid_solver::config::Method;
use asteroid_solver::heuristics::Heuristic;
use asteroid_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("asteroid-solver")
        .author("martin-t")
        .version("0.1")
        .about("Searches for a probe's route through an asteroid field")
        .arg(
            Arg::with_name("dfs")
                .long("--dfs")
                .help("run depth first search"),
        )
        .arg(
            Arg::with_name("bfs")
                .long("--bfs")
                .help("run breadth first search"),
        )
        .arg(
            Arg::with_name("best-manhattan")
                .long("--best-manhattan")
                .help("run best first search with the manhattan heuristic"),
        )
        .arg(
            Arg::with_name("best-blocking")
                .long("--best-blocking")
                .help("run best first search with the asteroid blocking heuristic"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let mut methods = Vec::new();
    if matches.is_present("dfs") {
        methods.push(Method::Dfs);
    }
    if matches.is_present("bfs") {
        methods.push(Method::Bfs);
    }
    if matches.is_present("best-manhattan") {
        methods.push(Method::BestFirst(Heuristic::Manhattan));
    }
    if matches.is_present("best-blocking") {
        methods.push(Method::BestFirst(Heuristic::AsteroidBlocking));
    }
    if methods.is_empty() {
        methods.extend(&Method::ALL);
    }

    let path = matches.value_of("file").unwrap();
    let puzzle = path.load_puzzle().unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap();
        println!(
            "Can't load puzzle {} in {}: {}",
            path,
            current_dir.display(),
            err
        );
        process::exit(1);
    });

    println!("Initial state:");
    print!("{}", puzzle);
    println!();

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        TableCell::new("Method"),
        TableCell::new("Solved"),
        TableCell::new("Moves"),
        TableCell::new("Nodes explored"),
    ]));

    for &method in &methods {
        println!("--- {} ---", method);
        let result = puzzle.solve(method);
        match result.moves {
            Some(ref moves) => {
                println!("Solution found in {} moves", moves.move_cnt());
                if !moves.is_empty() {
                    println!("Path: {}", moves);
                }
            }
            None => println!("No solution"),
        }
        println!("{}", result.stats);
        println!();

        let (solved, move_cnt) = match result.moves {
            Some(ref moves) => ("yes", moves.move_cnt().to_string()),
            None => ("no", "-".to_string()),
        };
        table.add_row(Row::new(vec![
            TableCell::new(&method.to_string()),
            TableCell::new(solved),
            TableCell::new(&move_cnt),
            TableCell::new(&result.stats.nodes_explored.to_string()),
        ]));
    }

    if methods.len() > 1 {
        table.printstd();
    }
}
