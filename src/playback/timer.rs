use std::time::{Duration, Instant};

/// Period of the position timer. One tick is one second of playback.
pub const TICK: Duration = Duration::from_secs(1);

/// Owned, deadline-driven repeating timer.
///
/// The timer never runs on its own: the event loop calls `poll` and the
/// timer reports how many whole periods have elapsed since it last fired.
/// At most one ticker exists at a time; `start` always replaces it.
#[derive(Debug)]
pub struct PlaybackTimer {
    period: Duration,
    ticker: Option<Ticker>,
}

#[derive(Debug)]
struct Ticker {
    next_due: Instant,
}

impl PlaybackTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            // A zero period would fire forever within a single poll.
            period: period.max(Duration::from_millis(1)),
            ticker: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm a fresh ticker whose first tick is due one period after `now`.
    /// Any ticker already held is released first.
    pub fn start(&mut self, now: Instant) {
        self.stop();
        self.ticker = Some(Ticker {
            next_due: now + self.period,
        });
    }

    /// Release the ticker. No-op when stopped.
    pub fn stop(&mut self) {
        self.ticker = None;
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.as_ref().map(|t| t.next_due)
    }

    /// Number of ticks due at `now`. The ticker keeps the cadence it was
    /// started with, so a late poll reports every missed tick at once,
    /// saturating at `u32::MAX`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(ticker) = self.ticker.as_mut() else {
            return 0;
        };
        if now < ticker.next_due {
            return 0;
        }

        let late = (now - ticker.next_due).as_nanos();
        let period = self.period.as_nanos();
        let into_period = u64::try_from(late % period).unwrap_or(0);
        ticker.next_due = now + self.period.saturating_sub(Duration::from_nanos(into_period));

        u32::try_from(late / period + 1).unwrap_or(u32::MAX)
    }
}

impl Default for PlaybackTimer {
    fn default() -> Self {
        Self::new(TICK)
    }
}
