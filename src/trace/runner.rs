use std::fmt;

use crate::cache::{LruPageCache, TouchResult};
use crate::common::{PageNumber, PageReference};

/// The state of the cache immediately after one reference was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    /// The reference that was fed to the cache
    pub reference: PageReference,
    /// Hit/miss outcome, including the evicted page if any
    pub outcome: TouchResult,
    /// Resident pages after the touch, MRU first
    pub frames: Vec<PageNumber>,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.frames.iter().enumerate() {
            writeln!(f, "FRAME {:2} | VPN: {:2}", i + 1, page.as_u64())?;
        }
        if let Some(evicted) = self.outcome.evicted() {
            writeln!(f, "EVICTED  | VPN: {:2}", evicted.as_u64())?;
        }
        write!(f, "=================")
    }
}

/// Running hit/miss/eviction totals for a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub references: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// TraceRunner drives the cache with a sequence of page references and
/// records the frame contents after each one. All ordering and eviction
/// decisions belong to the cache; the runner only feeds it and observes.
pub struct TraceRunner {
    cache: LruPageCache,
    stats: TraceStats,
}

impl TraceRunner {
    pub fn new(cache: LruPageCache) -> Self {
        Self {
            cache,
            stats: TraceStats::default(),
        }
    }

    /// Applies a single reference and returns the resulting step record.
    pub fn step(&mut self, reference: PageReference) -> TraceStep {
        let outcome = self.cache.touch(reference.page_number);

        self.stats.references += 1;
        match outcome {
            TouchResult::Hit => self.stats.hits += 1,
            TouchResult::Miss { evicted } => {
                self.stats.misses += 1;
                if evicted.is_some() {
                    self.stats.evictions += 1;
                }
            }
        }

        TraceStep {
            reference,
            outcome,
            frames: self.cache.snapshot(),
        }
    }

    /// Applies every reference in the stream, in order, until it is
    /// exhausted. Returns one step record per reference.
    pub fn run<I>(&mut self, references: I) -> Vec<TraceStep>
    where
        I: IntoIterator<Item = PageReference>,
    {
        references.into_iter().map(|r| self.step(r)).collect()
    }

    /// Totals accumulated so far.
    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    /// The cache being driven.
    pub fn cache(&self) -> &LruPageCache {
        &self.cache
    }

    /// Consumes the runner, returning the cache in its final state.
    pub fn into_cache(self) -> LruPageCache {
        self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{PageOffset, VirtualAddress};

    fn reference(page: u64) -> PageReference {
        PageReference::new(PageNumber::new(page), PageOffset::new(0))
    }

    #[test]
    fn test_step_records_frames_mru_first() {
        let mut runner = TraceRunner::new(LruPageCache::new(5).unwrap());

        let step = runner.step(reference(1));
        assert_eq!(step.frames, vec![PageNumber::new(1)]);
        assert!(step.outcome.is_miss());

        let step = runner.step(reference(2));
        assert_eq!(step.frames, vec![PageNumber::new(2), PageNumber::new(1)]);
    }

    #[test]
    fn test_stats_accumulate() {
        let mut runner = TraceRunner::new(LruPageCache::new(2).unwrap());
        runner.run([1, 2, 1, 3, 2].map(reference));

        let stats = runner.stats();
        assert_eq!(stats.references, 5);
        assert_eq!(stats.hits, 1); // second touch of 1
        assert_eq!(stats.misses, 4);
        assert_eq!(stats.evictions, 2); // 3 evicts 2, then 2 evicts 1
    }

    #[test]
    fn test_runner_performs_no_cache_logic() {
        // Runner output must be exactly what the cache reports
        let mut runner = TraceRunner::new(LruPageCache::new(3).unwrap());
        let step = runner.step(reference(42));
        assert_eq!(step.frames, runner.cache().snapshot());
        assert!(runner.cache().is_resident(PageNumber::new(42)));
    }

    #[test]
    fn test_step_display_format() {
        let mut runner = TraceRunner::new(LruPageCache::new(5).unwrap());
        runner.step(reference(1));
        let step = runner.step(reference(3));

        let rendered = step.to_string();
        assert!(rendered.contains("FRAME  1 | VPN:  3"));
        assert!(rendered.contains("FRAME  2 | VPN:  1"));
        assert!(!rendered.contains("EVICTED"));
        assert!(rendered.ends_with("================="));
    }

    #[test]
    fn test_step_display_reports_eviction() {
        let mut runner = TraceRunner::new(LruPageCache::new(1).unwrap());
        runner.step(reference(1));
        let step = runner.step(reference(2));

        assert!(step.to_string().contains("EVICTED  | VPN:  1"));
    }

    #[test]
    fn test_offset_ignored_by_cache() {
        // Two references to the same page with different offsets are a
        // miss then a hit
        let mut runner = TraceRunner::new(LruPageCache::new(5).unwrap());
        let first = PageReference::from(VirtualAddress::new(0x048));
        let second = PageReference::from(VirtualAddress::new(0x04E));

        assert!(runner.step(first).outcome.is_miss());
        assert!(runner.step(second).outcome.is_hit());
        assert_eq!(runner.cache().len(), 1);
    }
}
