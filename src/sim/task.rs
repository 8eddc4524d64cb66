//! Cancellable background tasks owned by a view
//!
//! A `ScheduledTask` aborts its tokio task when dropped, so a timer can never
//! fire after the view that started it is gone. Each task also gets a fresh
//! generation id; messages carry it so the receiver can discard anything sent
//! by a task it has since replaced.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::task::JoinHandle;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Identifies one spawned task across its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    fn next() -> Self {
        Self(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub struct ScheduledTask {
    generation: Generation,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawn a future built from its own generation id
    pub fn spawn<F, Fut>(build: F) -> Self
    where
        F: FnOnce(Generation) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let generation = Generation::next();
        let handle = tokio::spawn(build(generation));
        Self { generation, handle }
    }

    #[cfg(test)]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// True when a message came from this task
    pub fn owns(&self, generation: Generation) -> bool {
        self.generation == generation
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn dropping_the_task_stops_it() {
        let (tx, mut rx) = mpsc::channel(16);
        let task = ScheduledTask::spawn(|generation| async move {
            loop {
                if tx.send(generation).await.is_err() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        });

        let first = rx.recv().await;
        assert_eq!(first, Some(task.generation()));
        drop(task);

        // Once aborted the sender is dropped and the channel drains to None
        while rx.recv().await.is_some() {}
    }

    #[tokio::test]
    async fn generations_are_unique() {
        let a = ScheduledTask::spawn(|_| async {});
        let b = ScheduledTask::spawn(|_| async {});
        assert_ne!(a.generation(), b.generation());
        assert!(a.owns(a.generation()));
        assert!(!a.owns(b.generation()));
    }
}
