use std::time::{Duration, Instant};

use tracing::warn;

/// Fixed-rate frame pacer.
///
/// `wait` blocks until the next frame boundary. If a frame overruns its
/// slot the schedule restarts from now rather than bursting to catch up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    tick_rate: u32,
    period: Duration,
    next_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new(tick_rate: u32) -> Self {
        let tick_rate = tick_rate.max(1);
        Self {
            tick_rate,
            period: Duration::from_secs(1) / tick_rate,
            next_frame: None,
        }
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn wait(&mut self) {
        let now = Instant::now();
        let Some(deadline) = self.next_frame else {
            self.next_frame = Some(now + self.period);
            return;
        };

        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_frame = Some(deadline + self.period);
        } else {
            let behind = now - deadline;
            if behind > self.period {
                warn!(
                    behind_ms = behind.as_millis() as u64,
                    "frame pacer behind schedule"
                );
            }
            self.next_frame = Some(now + self.period);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_matches_rate() {
        assert_eq!(FramePacer::new(50).period(), Duration::from_millis(20));
        assert_eq!(FramePacer::new(0).tick_rate(), 1);
    }

    #[test]
    fn wait_holds_the_rate() {
        let mut pacer = FramePacer::new(100);
        let start = Instant::now();
        for _ in 0..6 {
            pacer.wait();
        }
        // First call arms the schedule, the next five each wait ~10ms
        assert!(start.elapsed() >= Duration::from_millis(45));
    }
}
