//! circq - Ring Buffer Benchmark Demo
//!
//! Mengukur latency push/pop, biaya growth, dan pola interleaved
//! producer/consumer pada satu thread.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]

use std::process;
use std::time::Instant;

use circq::core::{QueueError, RingBuffer, DEFAULT_CAPACITY};

/// Benchmark configuration
struct BenchConfig {
    iterations: usize,
    capacity: usize,
    batch_size: usize,
    verbose: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            capacity: DEFAULT_CAPACITY,
            batch_size: 1000,
            verbose: false,
        }
    }
}

fn main() {
    env_logger::init();

    let config = parse_args();

    if let Err(e) = run(&config) {
        log::error!("benchmark aborted: {}", e);
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(config: &BenchConfig) -> Result<(), QueueError> {
    println!("🚀 circq - Growable Ring Buffer");
    println!("===============================\n");

    log::info!(
        "iterations={} capacity={} batch={}",
        config.iterations,
        config.capacity,
        config.batch_size
    );

    benchmark_push(config)?;
    benchmark_push_pop(config)?;
    benchmark_interleaved(config)?;

    println!("\n✅ All benchmarks complete!");
    Ok(())
}

fn benchmark_push(config: &BenchConfig) -> Result<(), QueueError> {
    println!("📊 Push Benchmark (growth from initial capacity)");
    println!("------------------------------------------------");

    let mut rb = RingBuffer::with_capacity(config.capacity)?;

    let start = Instant::now();
    for i in 0..config.iterations {
        rb.push(i as u64);
    }
    let grow_duration = start.elapsed();
    let final_capacity = rb.capacity();

    // Pre-sized: tidak ada growth di hot path
    let mut presized = RingBuffer::with_capacity(config.iterations.max(1))?;
    let start = Instant::now();
    for i in 0..config.iterations {
        presized.push(i as u64);
    }
    let presized_duration = start.elapsed();

    let grow_ns = per_op_ns(grow_duration.as_nanos(), config.iterations);
    let presized_ns = per_op_ns(presized_duration.as_nanos(), config.iterations);

    println!("  Operations: {}", config.iterations);
    println!(
        "  Capacity: {} -> {} slots",
        config.capacity, final_capacity
    );
    println!("  Push latency (growing):  {:.2} ns/op", grow_ns);
    println!("  Push latency (pre-sized): {:.2} ns/op\n", presized_ns);

    Ok(())
}

fn benchmark_push_pop(config: &BenchConfig) -> Result<(), QueueError> {
    println!("📊 Push-then-Pop Benchmark");
    println!("--------------------------");

    let mut rb = RingBuffer::with_capacity(config.capacity)?;

    let start = Instant::now();
    for i in 0..config.iterations {
        rb.push(i as u64);
    }
    for i in 0..config.iterations {
        let value = rb.pop()?;
        if config.verbose && value != i as u64 {
            log::warn!("order mismatch: expected {}, got {}", i, value);
        }
    }
    let duration = start.elapsed();

    let ns = per_op_ns(duration.as_nanos(), config.iterations * 2);

    println!("  Operations: {}", config.iterations * 2);
    println!("  Latency: {:.2} ns/op", ns);
    println!(
        "  Throughput: {:.2} M ops/sec\n",
        (config.iterations * 2) as f64 / duration.as_secs_f64().max(f64::EPSILON) / 1_000_000.0
    );

    Ok(())
}

fn benchmark_interleaved(config: &BenchConfig) -> Result<(), QueueError> {
    println!("📊 Interleaved Benchmark (batch {})", config.batch_size);
    println!("----------------------------------");

    let mut rb = RingBuffer::with_capacity(config.capacity)?;
    let batch = config.batch_size.max(1);
    let rounds = config.iterations / batch;

    let mut next_in = 0u64;
    let mut next_out = 0u64;

    let start = Instant::now();
    for _ in 0..rounds {
        for _ in 0..batch {
            rb.push(next_in);
            next_in += 1;
        }
        // Sisakan setengah batch supaya cursor wrap
        for _ in 0..batch / 2 {
            let value = rb.pop()?;
            if value != next_out {
                log::warn!("order mismatch: expected {}, got {}", next_out, value);
            }
            next_out += 1;
        }
    }
    while !rb.is_empty() {
        rb.retrieve()?;
        next_out += 1;
    }
    let duration = start.elapsed();

    if config.verbose {
        log::info!("interleaved: pushed={} drained={}", next_in, next_out);
    }

    println!("  Rounds: {}", rounds);
    println!("  Final capacity: {} slots", rb.capacity());
    println!(
        "  Latency: {:.2} ns/op",
        per_op_ns(duration.as_nanos(), (next_in + next_out) as usize)
    );

    Ok(())
}

fn per_op_ns(total_ns: u128, ops: usize) -> f64 {
    if ops == 0 {
        return 0.0;
    }
    total_ns as f64 / ops as f64
}

fn parse_args() -> BenchConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = BenchConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--capacity" | "-c" => {
                if i + 1 < args.len() {
                    config.capacity = args[i + 1].parse().unwrap_or(DEFAULT_CAPACITY);
                    i += 1;
                }
            }
            "--batch" | "-b" => {
                if i + 1 < args.len() {
                    config.batch_size = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("circq - Growable Ring Buffer Benchmark\n");
                println!("Usage: circq [OPTIONS]\n");
                println!("Options:");
                println!("  -n, --iterations <N>  Operations per benchmark (default: 1000000)");
                println!("  -c, --capacity <N>    Initial capacity (default: 32)");
                println!("  -b, --batch <N>       Interleaved batch size (default: 1000)");
                println!("  -v, --verbose         Verbose output");
                println!("  -h, --help            Show this help");
                println!("\nLogging: set RUST_LOG=debug to trace storage growth");
                process::exit(0);
            }
            other => {
                log::warn!("ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    config
}
