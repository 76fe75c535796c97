use std::env;
use std::process;

use pagesim::cache::LruPageCache;
use pagesim::common::{ADDR_WIDTH, DEFAULT_FRAME_COUNT};
use pagesim::trace::{AddressDecoder, TraceFile, TraceRunner};

/// Built-in trace used when no file is given: pages 1, 2, 1, 3, 7, 4,
/// 5, 6, 1 under a 64-byte page size, enough to fill five frames and
/// force a few evictions.
const SAMPLE_TRACE: &str = "0048 0080 004E 00FC 01FC 0100 0140 0181 0048";

fn main() {
    println!("Pagesim - a virtual-memory LRU page cache simulator");
    println!("===================================================\n");

    let trace = match env::args().nth(1) {
        Some(path) => match TraceFile::open(&path) {
            Ok(trace) => {
                println!("Loaded trace from: {}", path);
                trace
            }
            Err(e) => {
                eprintln!("Could not load trace {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            println!("No trace file given, using the built-in sample");
            TraceFile::from_text(SAMPLE_TRACE, ADDR_WIDTH)
        }
    };

    println!("\nVirtual addresses loaded:");
    for (i, token) in trace.tokens().iter().enumerate() {
        print!("{} ", token);
        if (i + 1) % 6 == 0 {
            println!();
        }
    }
    println!("\n");

    let cache = LruPageCache::new(DEFAULT_FRAME_COUNT).expect("frame count is positive");
    let mut runner = TraceRunner::new(cache);
    let decoder = AddressDecoder::default();

    for result in trace.references(&decoder) {
        match result {
            Ok(reference) => {
                let step = runner.step(reference);
                println!("{}", step);
            }
            Err(e) => eprintln!("Skipping bad token: {}", e),
        }
    }

    let stats = runner.stats();
    println!("\nTrace statistics:");
    println!("  - References: {}", stats.references);
    println!("  - Hits:       {}", stats.hits);
    println!("  - Misses:     {}", stats.misses);
    println!("  - Evictions:  {}", stats.evictions);
}
