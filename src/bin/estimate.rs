use std::time::Instant;

use furlong::race_mechanics::speed_bias;
use furlong::{estimate, estimate_parallel};

struct Args {
    scores: Vec<i32>,
    samples: u32,
    salt: Option<u32>,
    output: Option<String>,
    parallel: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut scores: Vec<i32> = vec![5, 5, 5, 5, 5, 5];
    let mut samples = 10_000u32;
    let mut salt: Option<u32> = None;
    let mut output: Option<String> = None;
    let mut parallel = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scores" => {
                i += 1;
                if i < args.len() {
                    scores = args[i]
                        .split(',')
                        .map(|s| {
                            s.trim().parse().unwrap_or_else(|_| {
                                eprintln!("Invalid score in --scores: {}", s);
                                std::process::exit(1);
                            })
                        })
                        .collect();
                }
            }
            "--samples" => {
                i += 1;
                if i < args.len() {
                    samples = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --samples value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--salt" => {
                i += 1;
                if i < args.len() {
                    salt = Some(args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --salt value: {}", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--parallel" => {
                parallel = true;
            }
            "--help" | "-h" => {
                println!(
                    "Usage: estimate [--scores S1,..,S6] [--samples N] [--salt SEED] [--output FILE] [--parallel]"
                );
                println!();
                println!("Options:");
                println!("  --scores S1,..,S6  Six lane scores, 1-10 (default: 5,5,5,5,5,5)");
                println!("  --samples N        Number of simulated races (default: 10000)");
                println!("  --salt SEED        Master seed for reproducible output (default: time-derived)");
                println!("  --output FILE      Write the result as JSON to FILE");
                println!("  --parallel         Fan simulations across rayon (bit-identical output)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: estimate [--scores S1,..,S6] [--samples N] [--salt SEED] [--output FILE] [--parallel]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        scores,
        samples,
        salt,
        output,
        parallel,
    }
}

fn main() {
    let args = parse_args();

    println!("Win/Place/Show Estimation ({} samples)", args.samples);
    if let Some(salt) = args.salt {
        println!("  Salt:        {}", salt);
    } else {
        println!("  Salt:        time-derived (not reproducible)");
    }

    let start = Instant::now();
    let run = if args.parallel {
        estimate_parallel(&args.scores, args.samples, args.salt)
    } else {
        estimate(&args.scores, args.samples, args.salt)
    };
    let result = match run {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    let per_sample_us = elapsed.as_secs_f64() * 1e6 / args.samples as f64;
    let throughput = args.samples as f64 / elapsed.as_secs_f64();
    println!("  Elapsed:     {:.1} ms", elapsed.as_secs_f64() * 1000.0);
    println!("  Per sample:  {:.2} \u{00b5}s", per_sample_us);
    println!("  Throughput:  {:.0} races/sec", throughput);
    println!();

    println!("Lane  Score  Bias(bps)  Win(bps)  Place(bps)  Show(bps)");
    for lane in 0..6 {
        println!(
            "{:>4}  {:>5}  {:>9}  {:>8}  {:>10}  {:>9}",
            lane,
            result.scores[lane],
            speed_bias(result.scores[lane]),
            result.win_bps[lane],
            result.place_bps[lane],
            result.show_bps[lane],
        );
    }

    let win: u32 = result.win_bps.iter().sum();
    let place: u32 = result.place_bps.iter().sum();
    let show: u32 = result.show_bps.iter().sum();
    println!();
    println!("Sums: win={} place={} show={} (targets 10000/20000/30000)", win, place, show);

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(&result).unwrap_or_else(|err| {
            eprintln!("Failed to serialize result: {}", err);
            std::process::exit(1);
        });
        if let Err(err) = std::fs::write(&path, json) {
            eprintln!("Failed to write {}: {}", path, err);
            std::process::exit(1);
        }
        println!("Result:      {}", path);
    }
}
