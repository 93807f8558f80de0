//! Requests-per-minute over a 60-bucket sliding window of 60s each — one
//! bucket per second, summed across the trailing minute.
use std::time::Instant;

const BUCKET_COUNT: usize = 60;

pub struct RpmWindow {
    buckets: [u64; BUCKET_COUNT],
    bucket_start: Instant,
    current_bucket: usize,
}

impl RpmWindow {
    pub fn new() -> Self {
        Self {
            buckets: [0; BUCKET_COUNT],
            bucket_start: Instant::now(),
            current_bucket: 0,
        }
    }

    fn advance(&mut self) {
        let elapsed_secs = self.bucket_start.elapsed().as_secs();
        if elapsed_secs == 0 {
            return;
        }
        let steps = elapsed_secs.min(BUCKET_COUNT as u64) as usize;
        for _ in 0..steps {
            self.current_bucket = (self.current_bucket + 1) % BUCKET_COUNT;
            self.buckets[self.current_bucket] = 0;
        }
        self.bucket_start = Instant::now();
    }

    pub fn record(&mut self) {
        self.advance();
        self.buckets[self.current_bucket] += 1;
    }

    pub fn requests_per_minute(&mut self) -> u64 {
        self.advance();
        self.buckets.iter().sum()
    }
}

impl Default for RpmWindow {
    fn default() -> Self {
        Self::new()
    }
}
