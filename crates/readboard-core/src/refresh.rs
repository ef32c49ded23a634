//! Background refresh scheduling.
//!
//! [`RefreshScheduler`] decides, on every timer tick, whether the list
//! queries should be invalidated. The timer itself belongs to the host; the
//! scheduler only tracks its lifecycle so a tick that races teardown is
//! dropped instead of signaling.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::CacheKey;

/// Refresh configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshPolicy {
    pub enabled: bool,
    /// Base period between refreshes.
    pub interval_secs: u64,
    /// Upper bound of the random delay added to the period, spreading
    /// clients that loaded at the same moment.
    pub jitter_secs: u64,
    /// Skip ticks while the page is not visible.
    pub pause_when_hidden: bool,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 300,
            jitter_secs: 30,
            pause_when_hidden: true,
        }
    }
}

impl RefreshPolicy {
    /// Timer period for a jitter sample in `[0, 1]` (clamped).
    pub fn period(&self, jitter_fraction: f64) -> Duration {
        let fraction = if jitter_fraction.is_nan() {
            0.0
        } else {
            jitter_fraction.clamp(0.0, 1.0)
        };
        Duration::from_secs(self.interval_secs)
            + Duration::from_secs(self.jitter_secs).mul_f64(fraction)
    }
}

/// Why a tick did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The scheduler was never started or has been stopped.
    NotRunning,
    /// Page hidden and the policy pauses refresh.
    Hidden,
}

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshDecision {
    Invalidate(&'static [CacheKey]),
    Skip(SkipReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Stopped,
}

/// Lifecycle and tick decisions for the background refresh timer.
///
/// `Idle -> Running -> Stopped`. A stopped scheduler never restarts; a new
/// mount creates a new scheduler.
#[derive(Clone, Debug)]
pub struct RefreshScheduler {
    policy: RefreshPolicy,
    phase: Phase,
    ticks: u64,
}

impl RefreshScheduler {
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy,
            phase: Phase::Idle,
            ticks: 0,
        }
    }

    pub fn policy(&self) -> &RefreshPolicy {
        &self.policy
    }

    /// Start scheduling. Returns the timer period to install, or `None` when
    /// refresh is disabled or the scheduler is not idle.
    pub fn start(&mut self, jitter_fraction: f64) -> Option<Duration> {
        if self.phase != Phase::Idle || !self.policy.enabled || self.policy.interval_secs == 0 {
            return None;
        }
        self.phase = Phase::Running;
        let period = self.policy.period(jitter_fraction);
        debug!(?period, "refresh: started");
        Some(period)
    }

    /// Decide what a timer tick should do.
    pub fn on_tick(&mut self, page_visible: bool) -> RefreshDecision {
        if self.phase != Phase::Running {
            return RefreshDecision::Skip(SkipReason::NotRunning);
        }
        if self.policy.pause_when_hidden && !page_visible {
            debug!("refresh: page hidden, skipping tick");
            return RefreshDecision::Skip(SkipReason::Hidden);
        }
        self.ticks += 1;
        debug!(tick = self.ticks, "refresh: invalidating list queries");
        RefreshDecision::Invalidate(&CacheKey::BACKGROUND)
    }

    /// Stop for good. Later ticks are skipped.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            debug!(ticks = self.ticks, "refresh: stopped");
        }
        self.phase = Phase::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Ticks that produced an invalidation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_with_jitter() {
        let policy = RefreshPolicy {
            interval_secs: 60,
            jitter_secs: 10,
            ..RefreshPolicy::default()
        };
        assert_eq!(policy.period(0.0), Duration::from_secs(60));
        assert_eq!(policy.period(0.5), Duration::from_secs(65));
        assert_eq!(policy.period(7.0), Duration::from_secs(70));
        assert_eq!(policy.period(f64::NAN), Duration::from_secs(60));
    }

    #[test]
    fn test_lifecycle() {
        let mut scheduler = RefreshScheduler::new(RefreshPolicy::default());
        assert_eq!(
            scheduler.on_tick(true),
            RefreshDecision::Skip(SkipReason::NotRunning)
        );

        assert!(scheduler.start(0.0).is_some());
        assert!(scheduler.start(0.0).is_none());
        assert_eq!(
            scheduler.on_tick(true),
            RefreshDecision::Invalidate(&CacheKey::BACKGROUND)
        );

        scheduler.stop();
        assert!(!scheduler.is_running());
        assert_eq!(
            scheduler.on_tick(true),
            RefreshDecision::Skip(SkipReason::NotRunning)
        );
        assert!(scheduler.start(0.0).is_none());
        assert_eq!(scheduler.ticks(), 1);
    }

    #[test]
    fn test_never_touches_reader_article() {
        let mut scheduler = RefreshScheduler::new(RefreshPolicy::default());
        scheduler.start(0.3);
        let RefreshDecision::Invalidate(keys) = scheduler.on_tick(true) else {
            panic!("expected invalidation");
        };
        assert!(!keys.contains(&CacheKey::Article));
    }

    #[test]
    fn test_hidden_page() {
        let mut scheduler = RefreshScheduler::new(RefreshPolicy::default());
        scheduler.start(0.0);
        assert_eq!(scheduler.on_tick(false), RefreshDecision::Skip(SkipReason::Hidden));

        let mut scheduler = RefreshScheduler::new(RefreshPolicy {
            pause_when_hidden: false,
            ..RefreshPolicy::default()
        });
        scheduler.start(0.0);
        assert!(matches!(scheduler.on_tick(false), RefreshDecision::Invalidate(_)));
    }

    #[test]
    fn test_disabled() {
        let mut scheduler = RefreshScheduler::new(RefreshPolicy {
            enabled: false,
            ..RefreshPolicy::default()
        });
        assert_eq!(scheduler.start(0.0), None);
        assert!(!scheduler.is_running());
    }
}
