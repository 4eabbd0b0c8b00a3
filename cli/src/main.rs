//! Interactive front-end for the mobility simulator
//!
//! Prompts for a simulation kind, then either three integers (passenger
//! count, floor count, elevator capacity) for an elevator run, or a
//! strategy name for a robot coverage run. Invalid input re-prompts;
//! it never crashes the process.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use mobility_simulator_core_rs::{
    CoverageEngine, ElevatorConfig, ElevatorKind, RobotConfig, RobotStrategy, SimulationEngine,
};

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(1);

    loop {
        match prompt(&mut lines, "Run which simulation? Enter elevator or robot: ") {
            Some(answer) => match answer.trim().to_lowercase().as_str() {
                "elevator" => {
                    run_elevator(&mut lines, seed);
                    break;
                }
                "robot" => {
                    run_robot(&mut lines, seed);
                    break;
                }
                _ => println!("Invalid input, please try again"),
            },
            None => return, // stdin closed
        }
    }
}

/// Print a prompt and read one line; None when stdin is exhausted
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Option<String> {
    print!("{}", message);
    let _ = io::stdout().flush();
    lines.next()?.ok()
}

/// Keep prompting until the answer parses as a usize
fn prompt_usize(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Option<usize> {
    loop {
        let answer = prompt(lines, message)?;
        match answer.trim().parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Invalid input, please try again"),
        }
    }
}

fn run_elevator(lines: &mut impl Iterator<Item = io::Result<String>>, seed: u64) {
    loop {
        let total_passengers = match prompt_usize(lines, "How many passengers are there?: ") {
            Some(v) => v,
            None => return,
        };
        let num_floors = match prompt_usize(lines, "How many floors are there?: ") {
            Some(v) => v,
            None => return,
        };
        let capacity = match prompt_usize(lines, "How many passengers can fit in the elevator?: ")
        {
            Some(v) => v,
            None => return,
        };

        let config = ElevatorConfig {
            num_floors,
            total_passengers,
            kind: ElevatorKind::Ordinary,
            capacity,
            rng_seed: seed,
        };

        match SimulationEngine::new(config) {
            Ok(mut engine) => {
                let result = engine.run();
                if result.converged {
                    println!("All passengers have been served - End of simulation");
                    println!("Average journey time: {}", result.average_journey_time);
                    println!(
                        "Elevator movements: {}",
                        engine.event_log().events_of_type("ElevatorMoved").len()
                    );
                } else {
                    println!(
                        "Simulation did not finish within {} steps; discarding the run",
                        result.steps
                    );
                }
                return;
            }
            Err(e) => println!("Invalid input, please try again ({})", e),
        }
    }
}

fn run_robot(lines: &mut impl Iterator<Item = io::Result<String>>, seed: u64) {
    let strategy = loop {
        let answer = match prompt(
            lines,
            "What robot to run? Enter Standard, RandomWalk, or WallFollowing: ",
        ) {
            Some(v) => v,
            None => return,
        };
        match answer.trim().to_lowercase().as_str() {
            "standard" => break RobotStrategy::Standard,
            "randomwalk" => break RobotStrategy::RandomWalk,
            "wallfollowing" => break RobotStrategy::WallFollowing,
            _ => println!("Invalid input, please try again"),
        }
    };

    let config = RobotConfig {
        width: 5,
        height: 5,
        num_obstacles: 5,
        velocity: 1.0,
        min_coverage: 1.0,
        strategy,
        rng_seed: seed,
    };

    match CoverageEngine::new(config) {
        Ok(mut engine) => {
            let result = engine.run();
            if result.converged {
                println!(
                    "Room cleaned to {:.0}% coverage in {} steps",
                    result.coverage * 100.0,
                    result.steps
                );
            } else {
                println!(
                    "Robot did not reach the coverage target within {} steps; discarding the run",
                    result.steps
                );
            }
            println!(
                "Tiles cleaned: {}",
                engine.room().num_cleaned_tiles()
            );
        }
        Err(e) => println!("Invalid input, please try again ({})", e),
    }
}
