//! Simulated stream bitrate for the live view OSD
//!
//! Every interval the reading moves by a random amount in [-20, 20) KB/s and
//! is clamped to 50..=250.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::Duration;
use tokio::sync::mpsc;

use super::task::ScheduledTask;
use super::SimEvent;

pub const START_KBPS: f64 = 120.0;
pub const MIN_KBPS: f64 = 50.0;
pub const MAX_KBPS: f64 = 250.0;
pub const MAX_STEP_KBPS: f64 = 20.0;

/// Uniform value in [0, 1)
pub fn random_unit() -> f64 {
    // RandomState is seeded per instance, which is enough for UI jitter
    let bits = RandomState::new().build_hasher().finish() >> 11;
    bits as f64 / (1u64 << 53) as f64
}

/// Next reading for a delta in [-MAX_STEP, MAX_STEP)
pub fn apply_jitter(current: f64, delta: f64) -> f64 {
    (current + delta).clamp(MIN_KBPS, MAX_KBPS)
}

pub fn random_delta() -> f64 {
    random_unit() * (MAX_STEP_KBPS * 2.0) - MAX_STEP_KBPS
}

/// Whole KB/s as shown on screen
pub fn display_kbps(kbps: f64) -> u32 {
    kbps.floor() as u32
}

/// Start the jitter timer; the first reading arrives after one interval
pub fn spawn(interval: Duration, tx: mpsc::Sender<SimEvent>) -> ScheduledTask {
    ScheduledTask::spawn(move |generation| async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await; // first tick is immediate
        let mut kbps = START_KBPS;

        loop {
            ticker.tick().await;
            kbps = apply_jitter(kbps, random_delta());
            if tx.send(SimEvent::Bitrate { generation, kbps }).await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_is_clamped() {
        assert_eq!(apply_jitter(240.0, 19.9), MAX_KBPS);
        assert_eq!(apply_jitter(55.0, -20.0), MIN_KBPS);
        assert_eq!(apply_jitter(120.0, 7.5), 127.5);
    }

    #[test]
    fn random_values_stay_in_range() {
        for _ in 0..1000 {
            let unit = random_unit();
            assert!((0.0..1.0).contains(&unit));
            let delta = random_delta();
            assert!((-MAX_STEP_KBPS..MAX_STEP_KBPS).contains(&delta));
        }
    }

    #[test]
    fn long_walk_never_leaves_bounds() {
        let mut kbps = START_KBPS;
        for _ in 0..10_000 {
            kbps = apply_jitter(kbps, random_delta());
            assert!((MIN_KBPS..=MAX_KBPS).contains(&kbps));
        }
    }

    #[test]
    fn display_floors() {
        assert_eq!(display_kbps(127.99), 127);
        assert_eq!(display_kbps(START_KBPS), 120);
    }

    #[tokio::test(start_paused = true)]
    async fn emits_after_each_interval() {
        let (tx, mut rx) = mpsc::channel(8);
        let task = spawn(Duration::from_secs(2), tx);

        for _ in 0..3 {
            match rx.recv().await {
                Some(SimEvent::Bitrate { generation, kbps }) => {
                    assert!(task.owns(generation));
                    assert!((MIN_KBPS..=MAX_KBPS).contains(&kbps));
                }
                other => panic!("unexpected message: {:?}", other),
            }
        }
    }
}
