use async_trait::async_trait;
use bacteriaguard_engine::traits::Clock;
use std::time::Duration;

/// Wall-clock pacing on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Skips every delay but still yields, so other tasks get to observe each phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantClock;

#[async_trait]
impl Clock for InstantClock {
    async fn sleep(&self, _delay: Duration) {
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_clock_follows_the_timer() {
        let t0 = tokio::time::Instant::now();
        TokioClock.sleep(Duration::from_millis(1500)).await;
        assert!(t0.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn instant_clock_does_not_advance_time() {
        let t0 = tokio::time::Instant::now();
        InstantClock.sleep(Duration::from_secs(60)).await;
        assert!(t0.elapsed() < Duration::from_millis(1));
    }
}
