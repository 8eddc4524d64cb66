// Simulation - timers standing in for real camera and pairing hardware
//
// Every background job is a `ScheduledTask` owned by the view state that
// started it. Results come back to the UI loop as `SimEvent`s tagged with the
// task's generation.

pub mod bitrate;
pub mod pairing;
pub mod task;

pub use task::{Generation, ScheduledTask};

use crate::analysis::FrameAnalyzer;
use tokio::sync::mpsc;

/// Messages from background tasks to the UI loop
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    Bitrate { generation: Generation, kbps: f64 },
    PairingComplete { generation: Generation },
    AnalysisReady { generation: Generation, text: String },
}

/// Run frame analysis for a camera image in the background
pub fn spawn_analysis(
    analyzer: FrameAnalyzer,
    image_url: String,
    tx: mpsc::Sender<SimEvent>,
) -> ScheduledTask {
    ScheduledTask::spawn(move |generation| async move {
        let text = analyzer.analyze_url(&image_url).await;
        let _ = tx.send(SimEvent::AnalysisReady { generation, text }).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SIMULATION_MESSAGE;
    use crate::config::AnalysisConfig;

    #[tokio::test]
    async fn analysis_task_reports_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let analyzer = FrameAnalyzer::new(&AnalysisConfig::default());
        let task = spawn_analysis(analyzer, "https://example.invalid/a.jpg".into(), tx);

        match rx.recv().await {
            Some(SimEvent::AnalysisReady { generation, text }) => {
                assert!(task.owns(generation));
                assert_eq!(text, SIMULATION_MESSAGE);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
