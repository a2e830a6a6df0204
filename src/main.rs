mod dice;
mod game;
mod rng;
mod score;
mod simulation;

use clap::{Parser, Subcommand};
use game::{Game, SaveError};
use rayon::prelude::*;
use rng::GameRng;
use score::{score_round, Category};
use simulation::engine::{run_game, GameResult};
use simulation::policy::Policy;
use std::collections::HashMap;
use std::io::Write;

#[derive(Parser)]
#[command(name = "tolva")]
#[command(about = "Tolva Dice Game Simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Category-selection policy: "random" or "greedy"
    #[arg(short, long, default_value = "greedy")]
    policy: String,

    /// Enable verbose output for single game
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of simulated games (default)
    Run {
        /// Number of games to simulate
        #[arg(short, long, default_value = "1000")]
        num_games: usize,

        /// Category-selection policy: "random" or "greedy"
        #[arg(short, long, default_value = "greedy")]
        policy: String,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Enable verbose output for single game
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score one hand of six dice against a category
    Score {
        /// Six die face values, e.g. 4 4 4 2 2 6
        #[arg(num_args = 6)]
        dice: Vec<u8>,

        /// Category: "Low" or 4..12
        #[arg(short, long)]
        category: String,
    },

    /// Play an interactive game in the terminal
    Play {
        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Where to persist an in-progress session
        #[arg(long, default_value = "tolva-save.json")]
        save_file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            num_games,
            policy,
            seed,
            verbose,
        }) => {
            run_simulation(num_games, seed, &policy, verbose);
        }
        Some(Commands::Score { dice, category }) => {
            score_hand(&dice, &category);
        }
        Some(Commands::Play { seed, save_file }) => {
            play_interactive(seed, &save_file);
        }
        None => {
            let num_games = if cli.verbose { 1 } else { 1000 };
            run_simulation(num_games, cli.seed, &cli.policy, cli.verbose);
        }
    }
}

fn parse_policy(name: &str) -> Policy {
    match Policy::parse(name) {
        Some(policy) => policy,
        None => {
            eprintln!("✗ Unknown policy '{}': expected 'random' or 'greedy'", name);
            std::process::exit(1);
        }
    }
}

fn run_simulation(num_games: usize, seed: Option<u64>, policy_name: &str, verbose: bool) {
    let policy = parse_policy(policy_name);

    println!("\n=== Tolva Dice Game Simulator ===\n");
    println!("Policy: {}", policy_name);
    println!("Games: {}", num_games);
    if let Some(s) = seed {
        println!("Seed: {}", s);
    }
    println!();

    let start = std::time::Instant::now();
    let results: Vec<GameResult> = if let Some(base_seed) = seed {
        // Sequential with fixed seed
        (0..num_games)
            .map(|i| run_game(base_seed.wrapping_add(i as u64), policy, verbose && i == 0))
            .collect()
    } else if verbose {
        // Sequential for verbose mode (verbose only makes sense for first game)
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64;
        println!("Seed: {}", seed);
        (0..num_games)
            .map(|i| run_game(seed.wrapping_add(i as u64), policy, i == 0))
            .collect()
    } else {
        // Parallel with random seeds
        (0..num_games)
            .into_par_iter()
            .map(|i| {
                let seed = (std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap()
                    .as_nanos() as u64)
                    .wrapping_add(i as u64);
                run_game(seed, policy, false)
            })
            .collect()
    };
    let elapsed = start.elapsed();

    let total: u64 = results.iter().map(|r| u64::from(r.total_score)).sum();
    let avg = total as f64 / num_games as f64;
    let best = results.iter().map(|r| r.total_score).max().unwrap_or(0);
    let worst = results.iter().map(|r| r.total_score).min().unwrap_or(0);

    // Per-category averages across all games
    let mut by_category: HashMap<String, (u64, usize)> = HashMap::new();
    for result in &results {
        for record in &result.records {
            let entry = by_category.entry(record.category.to_string()).or_insert((0, 0));
            entry.0 += u64::from(record.score);
            entry.1 += 1;
        }
    }

    println!("=== Results ===\n");
    println!("Average total score: {:.1}", avg);
    println!("Best game: {}", best);
    println!("Worst game: {}", worst);
    println!();

    println!("Total score distribution (buckets of 10):");
    let mut buckets: HashMap<u32, usize> = HashMap::new();
    for result in &results {
        *buckets.entry(result.total_score / 10 * 10).or_insert(0) += 1;
    }
    let mut bucket_list: Vec<_> = buckets.iter().collect();
    bucket_list.sort_by_key(|(b, _)| *b);
    for (bucket, count) in bucket_list {
        let pct = *count as f64 / num_games as f64 * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  {:3}-{:3}: {:5.1}% {} ({})", bucket, bucket + 9, pct, bar, count);
    }
    println!();

    println!("Average score per category:");
    for category in Category::ALL {
        if let Some((sum, count)) = by_category.get(&category.to_string()) {
            println!(
                "  {:>3}: {:6.2} over {} rounds",
                category.to_string(),
                *sum as f64 / *count as f64,
                count
            );
        }
    }

    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} games/sec)",
        elapsed,
        num_games as f64 / elapsed.as_secs_f64()
    );
}

fn score_hand(dice: &[u8], category_token: &str) {
    if dice.len() != dice::DIE_COUNT {
        eprintln!("✗ Expected exactly six die values, got {}", dice.len());
        std::process::exit(1);
    }
    if let Some(bad) = dice.iter().find(|v| !(1..=6).contains(*v)) {
        eprintln!("✗ Die value {} is outside 1..6", bad);
        std::process::exit(1);
    }

    let category: Category = match category_token.parse() {
        Ok(category) => category,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let mut values = [0u8; dice::DIE_COUNT];
    values.copy_from_slice(dice);

    let result = score_round(&values, category);
    println!("Dice: {:?}", values);
    println!("Category: {}", category);
    println!("Score: {}", result.score);
    if result.dice_used.is_empty() {
        println!("Dice used: none");
    } else {
        println!("Dice used: {:?}", result.dice_used);
    }
}

fn load_or_new(save_file: &str) -> Game {
    if !std::path::Path::new(save_file).exists() {
        return Game::new();
    }
    match Game::load_from_file(save_file) {
        Ok(game) => {
            println!("Resumed session from {} (round {})", save_file, game.round());
            game
        }
        Err(SaveError::Io(e)) => {
            eprintln!("✗ Could not read {}: {}; starting fresh", save_file, e);
            Game::new()
        }
        Err(e) => {
            eprintln!("✗ Saved session is corrupt ({}); starting fresh", e);
            Game::new()
        }
    }
}

fn print_dice(game: &Game) {
    let rendered: Vec<String> = game
        .dice()
        .dice()
        .iter()
        .map(|d| {
            if d.held {
                format!("[{}]", d.value)
            } else {
                format!(" {} ", d.value)
            }
        })
        .collect();
    println!(
        "Round {:2} | throws left: {} | total: {:3} | dice: {}",
        game.round(),
        game.throws_left(),
        game.total_score(),
        rendered.join(" ")
    );
}

fn print_results(game: &Game) {
    println!("\n=== Final results ===");
    for record in game.records() {
        println!(
            "  Round {:2}: {:>3} -> {:3} points (dice {:?})",
            record.round,
            record.category.to_string(),
            record.score,
            record.faces
        );
    }
    println!("  Total: {}", game.total_score());
}

fn play_interactive(seed: Option<u64>, save_file: &str) {
    let mut game = load_or_new(save_file);
    let mut rng = GameRng::new(seed);

    println!("\n=== Tolva ===");
    println!("Commands: throw | hold <1-6> | score <Low|4..12> | results | quit\n");

    let stdin = std::io::stdin();
    loop {
        print_dice(&game);
        print!("> ");
        std::io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");

        let outcome = match command {
            "t" | "throw" => game.throw(&mut rng),
            "h" | "hold" => match words.next().and_then(|w| w.parse::<usize>().ok()) {
                Some(n) if n >= 1 => game.toggle_hold(n - 1),
                _ => {
                    println!("! hold needs a die number 1-6");
                    continue;
                }
            },
            "s" | "score" => {
                let token = words.next().unwrap_or("");
                match token.parse::<Category>() {
                    Ok(category) => match game.score(category) {
                        Ok(record) => {
                            println!(
                                "Scored {} points on {} (dice used: {:?})",
                                record.score, record.category, record.dice_used
                            );
                            Ok(())
                        }
                        Err(e) => Err(e),
                    },
                    Err(e) => {
                        println!("! {}", e);
                        continue;
                    }
                }
            }
            "results" => {
                print_results(&game);
                continue;
            }
            "q" | "quit" => break,
            "" => continue,
            other => {
                println!("! unknown command '{}'", other);
                continue;
            }
        };

        if let Err(e) = outcome {
            println!("! {}", e);
        }

        if game.is_game_over() {
            print_results(&game);
            std::fs::remove_file(save_file).ok();
            return;
        }
    }

    if !game.is_game_over() {
        match game.save_to_file(save_file) {
            Ok(()) => println!("Session saved to {}", save_file),
            Err(e) => eprintln!("✗ Could not save session: {}", e),
        }
    }
}
