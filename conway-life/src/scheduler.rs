use log::{debug, trace};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Playing,
    Paused,
}

/// Play/pause state and the single pending timer deadline.
///
/// The scheduler never sleeps or spawns anything. The host run loop waits
/// until [`Scheduler::next_update`] and then calls [`Scheduler::poll`], so at
/// most one loop exists per scheduler. Pausing drops the deadline, after which
/// `poll` reports nothing due.
#[derive(Debug)]
pub struct Scheduler {
    interval: Duration,
    run_state: RunState,
    next_update: Option<Instant>,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            run_state: RunState::Idle,
            next_update: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_playing(&self) -> bool {
        self.run_state == RunState::Playing
    }

    /// When the host should next call [`Scheduler::poll`]. `None` unless playing.
    pub fn next_update(&self) -> Option<Instant> {
        self.next_update
    }

    /// Returns `true` if this call moved the scheduler into `Playing`, in which
    /// case the caller owes one immediate advance. Starting while already
    /// playing changes nothing.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            return false;
        }
        debug!("{:?} -> Playing, every {:?}", self.run_state, self.interval);
        self.run_state = RunState::Playing;
        self.next_update = Some(now + self.interval);
        true
    }

    /// Returns `true` if the scheduler was playing and is now paused.
    pub fn pause(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        debug!("Playing -> Paused");
        self.next_update = None;
        self.run_state = RunState::Paused;
        true
    }

    /// Consumes the pending deadline if it has passed and re-arms for the next
    /// future period. Missed periods are skipped rather than replayed. Returns
    /// `true` when one advance should run.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(mut next_update) = self.next_update else {
            return false;
        };
        if now < next_update {
            return false;
        }

        while next_update <= now {
            next_update += self.interval;
        }
        trace!("timer fired, re-armed in {:?}", next_update - now);
        self.next_update = Some(next_update);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn starts_idle_with_no_timer() {
        let scheduler = Scheduler::new(INTERVAL);
        assert_eq!(scheduler.run_state(), RunState::Idle);
        assert_eq!(scheduler.next_update(), None);
    }

    #[test]
    fn start_is_idempotent() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(INTERVAL);
        assert!(scheduler.start(t0));
        assert!(!scheduler.start(t0 + Duration::from_millis(50)));
        assert_eq!(scheduler.run_state(), RunState::Playing);
        assert_eq!(scheduler.next_update(), Some(t0 + INTERVAL));
    }

    #[test]
    fn pause_only_acts_while_playing() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(INTERVAL);
        assert!(!scheduler.pause());
        assert_eq!(scheduler.run_state(), RunState::Idle);

        scheduler.start(t0);
        assert!(scheduler.pause());
        assert_eq!(scheduler.run_state(), RunState::Paused);
        assert_eq!(scheduler.next_update(), None);
        assert!(!scheduler.pause());
        assert_eq!(scheduler.run_state(), RunState::Paused);
    }

    #[test]
    fn poll_fires_once_per_due_deadline() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(INTERVAL);
        scheduler.start(t0);
        assert!(!scheduler.poll(t0 + Duration::from_millis(99)));
        assert!(scheduler.poll(t0 + INTERVAL));
        assert!(!scheduler.poll(t0 + INTERVAL));
        assert_eq!(scheduler.next_update(), Some(t0 + 2 * INTERVAL));
    }

    #[test]
    fn poll_skips_missed_periods() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(INTERVAL);
        scheduler.start(t0);
        assert!(scheduler.poll(t0 + Duration::from_millis(350)));
        assert_eq!(scheduler.next_update(), Some(t0 + 4 * INTERVAL));
    }

    #[test]
    fn pause_cancels_pending_firing() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(INTERVAL);
        scheduler.start(t0);
        scheduler.pause();
        assert!(!scheduler.poll(t0 + 10 * INTERVAL));
    }

    #[test]
    fn restart_arms_a_fresh_timer() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new(INTERVAL);
        scheduler.start(t0);
        scheduler.pause();
        let t1 = t0 + Duration::from_millis(530);
        assert!(scheduler.start(t1));
        assert_eq!(scheduler.next_update(), Some(t1 + INTERVAL));
    }
}
