use std::env;
use std::process;
use std::time::Duration;

use classic_sorts::{Algorithm, Measurements, measure_trials};

const DEFAULT_SEED: u64 = 0x1234_5678_9ABC_DEF0;
const DEFAULT_SIZES: &[usize] = &[100, 1_000, 5_000, 10_000];
const DEFAULT_MIN: i64 = 0;
const DEFAULT_MAX: i64 = 10_000;
const DEFAULT_TRIALS: usize = 1;

struct Config {
    algorithms: Vec<Algorithm>,
    sizes: Vec<usize>,
    min: i64,
    max: i64,
    trials: usize,
    seed: u64,
    verify: bool,
    report: bool,
}

fn main() {
    let config = match parse_args() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage(&program_name());
            process::exit(2);
        }
    };

    if config.verify {
        verify_algorithms(&config.algorithms);
    }

    let measurements = match measure_trials(
        &config.algorithms,
        &config.sizes,
        config.min,
        config.max,
        config.trials,
        config.seed,
    ) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    if config.report {
        print_report(&measurements, config.trials);
    }
}

fn parse_args() -> Result<Config, String> {
    let mut args = env::args();
    let _program = args.next();

    let mut algorithms = Vec::new();
    let mut sizes = None;
    let mut min = DEFAULT_MIN;
    let mut max = DEFAULT_MAX;
    let mut trials = DEFAULT_TRIALS;
    let mut seed = DEFAULT_SEED;
    let mut verify = false;
    let mut report = true;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--algo" => {
                let name = args.next().ok_or("--algo requires a value")?;
                let parsed =
                    parse_algorithm(&name).ok_or_else(|| format!("unknown algorithm: {name}"))?;
                algorithms.push(parsed);
            }
            "--sizes" => {
                let value = args.next().ok_or("--sizes requires a value")?;
                sizes = Some(parse_sizes(&value)?);
            }
            "--min" => {
                let value = args.next().ok_or("--min requires a value")?;
                min = parse_i64(&value, "--min")?;
            }
            "--max" => {
                let value = args.next().ok_or("--max requires a value")?;
                max = parse_i64(&value, "--max")?;
            }
            "--trials" => {
                let value = args.next().ok_or("--trials requires a value")?;
                trials = parse_usize(&value, "--trials")?;
            }
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                seed = parse_u64(&value, "--seed")?;
            }
            "--verify" => verify = true,
            "--report" => report = true,
            "--no-report" => report = false,
            "--list" => {
                list_algorithms();
                process::exit(0);
            }
            "-h" | "--help" => {
                print_usage(&program_name());
                process::exit(0);
            }
            _ => return Err(format!("unknown argument: {arg}")),
        }
    }

    if algorithms.is_empty() {
        algorithms.extend(Algorithm::ALL);
    }
    let sizes = sizes.unwrap_or_else(|| DEFAULT_SIZES.to_vec());

    Ok(Config {
        algorithms,
        sizes,
        min,
        max,
        trials,
        seed,
        verify,
        report,
    })
}

fn program_name() -> String {
    env::args()
        .next()
        .unwrap_or_else(|| "perf_harness".to_string())
}

fn print_usage(program: &str) {
    eprintln!(
        "\
Usage:
  {program} [--algo <name>]... [--sizes N,N,...] [--min N] [--max N] [--trials N] [--seed N] [--verify]
  {program} --list

Options:
  --algo <name>    Algorithm to time; repeatable (default: all, see --list)
  --sizes N,N,...  Comma-separated input sizes (default: 100,1000,5000,10000)
  --min N          Smallest generated value, inclusive (default: 0)
  --max N          Largest generated value, inclusive (default: 10000)
  --trials N       Runs averaged per (algorithm, size) pair (default: 1)
  --seed N         RNG seed (default: 0x123456789ABCDEF0)
  --verify         Run a quick correctness check before timing
  --no-report      Suppress the timing report
  --list           Show available algorithms
"
    );
}

fn list_algorithms() {
    for algo in Algorithm::ALL {
        println!("{}", algo.name());
    }
}

fn parse_algorithm(name: &str) -> Option<Algorithm> {
    match name {
        "bubble_sort" => Some(Algorithm::Bubble),
        "merge_sort" => Some(Algorithm::Merge),
        "quick_sort" => Some(Algorithm::Quick),
        _ => None,
    }
}

fn parse_sizes(value: &str) -> Result<Vec<usize>, String> {
    value
        .split(',')
        .map(|part| parse_usize(part.trim(), "--sizes"))
        .collect()
}

fn parse_usize(value: &str, flag: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{flag} expects a non-negative integer"))
}

fn parse_u64(value: &str, flag: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| format!("{flag} expects a non-negative integer"))
}

fn parse_i64(value: &str, flag: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .map_err(|_| format!("{flag} expects an integer"))
}

fn verify_algorithms(algorithms: &[Algorithm]) {
    for &algo in algorithms {
        assert_eq!(
            algo.sort(vec![5, 3, 8, 1]),
            [1, 3, 5, 8],
            "{} failed verification",
            algo.name()
        );
        assert_eq!(
            algo.sort(vec![2, 2, 2]),
            [2, 2, 2],
            "{} failed verification",
            algo.name()
        );
    }
}

fn print_report(measurements: &Measurements, trials: usize) {
    for (algo, timings) in measurements.rows() {
        for (&len, &elapsed) in measurements.sizes().iter().zip(timings) {
            let line = report_line(algo, len, trials, elapsed);
            println!("{line}");
        }
    }
}

fn report_line(algo: Algorithm, len: usize, trials: usize, elapsed: Duration) -> String {
    let elapsed_s = elapsed.as_secs_f64();
    let throughput = if elapsed_s > 0.0 {
        format_rate(len as f64 / elapsed_s, "elem")
    } else {
        "n/a".to_string()
    };
    format!(
        "algo={} len={} trials={} elapsed_s={:.6} throughput={}",
        algo.name(),
        len,
        trials,
        elapsed_s,
        throughput
    )
}

fn format_rate(rate: f64, unit: &str) -> String {
    let (value, prefix) = if rate >= 1.0e12 {
        (rate / 1.0e12, "T")
    } else if rate >= 1.0e9 {
        (rate / 1.0e9, "G")
    } else if rate >= 1.0e6 {
        (rate / 1.0e6, "M")
    } else if rate >= 1.0e3 {
        (rate / 1.0e3, "K")
    } else {
        (rate, "")
    };
    format!("{value:.3} {prefix}{unit}/s")
}
