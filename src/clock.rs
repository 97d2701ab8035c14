use std::time::Duration;

/// Owned periodic tick source.
///
/// At most one schedule exists at a time: [`Clock::restart`] replaces the
/// previous one, so two tick streams can never run side by side. Time is
/// fed in by the caller, which keeps the clock deterministic under test.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Clock {
    schedule: Option<Schedule>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Schedule {
    interval: Duration,
    elapsed: Duration,
}

impl Clock {
    /// Creates a clock already running at `interval`.
    #[must_use]
    pub fn running(interval: Duration) -> Self {
        let mut clock = Self::default();
        clock.restart(interval);
        clock
    }

    /// Cancels any pending schedule and starts a fresh one at `interval`.
    pub fn restart(&mut self, interval: Duration) {
        self.cancel();
        self.schedule = Some(Schedule {
            interval,
            elapsed: Duration::ZERO,
        });
    }

    /// Drops the pending schedule. No ticks fire until the next restart.
    pub fn cancel(&mut self) {
        self.schedule = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Interval of the active schedule, if any.
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.schedule.map(|schedule| schedule.interval)
    }

    /// Feeds `elapsed` wall time into the clock and reports whether a tick
    /// is due.
    ///
    /// Fires at most once per call; time beyond one interval is dropped
    /// rather than replayed as a burst of ticks.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };

        schedule.elapsed += elapsed;
        if schedule.elapsed < schedule.interval {
            return false;
        }

        let carry = schedule.elapsed - schedule.interval;
        schedule.elapsed = if carry < schedule.interval {
            carry
        } else {
            Duration::ZERO
        };
        true
    }
}
