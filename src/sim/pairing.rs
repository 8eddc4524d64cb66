//! Simulated pairing handshake for the setup wizard

use std::time::Duration;
use tokio::sync::mpsc;

use super::task::ScheduledTask;
use super::SimEvent;

/// Report completion once `delay` has elapsed
pub fn spawn(delay: Duration, tx: mpsc::Sender<SimEvent>) -> ScheduledTask {
    ScheduledTask::spawn(move |generation| async move {
        tokio::time::sleep(delay).await;
        tracing::info!("Simulated pairing finished after {:?}", delay);
        let _ = tx.send(SimEvent::PairingComplete { generation }).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn completes_after_delay() {
        let (tx, mut rx) = mpsc::channel(1);
        let task = spawn(Duration::from_secs(4), tx);

        let started = tokio::time::Instant::now();
        match rx.recv().await {
            Some(SimEvent::PairingComplete { generation }) => assert!(task.owns(generation)),
            other => panic!("unexpected message: {:?}", other),
        }
        assert!(started.elapsed() >= Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_pairing_never_reports() {
        let (tx, mut rx) = mpsc::channel(1);
        let task = spawn(Duration::from_secs(4), tx);
        drop(task);

        tokio::time::advance(Duration::from_secs(10)).await;
        assert!(rx.recv().await.is_none());
    }
}
