use std::time::Instant;

/// 性能统计 Guard：drop 时记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = airfare_deadline::perf::PerfGuard::new("calculate_deadlines");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_us = u64::try_from(self.start.elapsed().as_micros()).unwrap_or(u64::MAX);

        tracing::debug!(
            target: "perf",
            op = self.op,
            elapsed_us,
            "done"
        );
    }
}
