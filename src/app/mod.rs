pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownManager;
pub use state::{Driver, RunState};

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::model::clock::TimeSource;
use crate::model::config::AppConfig;
use crate::model::error::EmitError;
use crate::model::sink::{ChannelSink, RecordSink};

impl<K, S> Driver<K, S>
where
    K: RecordSink + Send,
    S: TimeSource + Send,
{
    /// Runs ticks until shutdown is requested, the tick budget is spent, or
    /// a record cannot be delivered. Returns the number of ticks emitted.
    pub async fn run(&mut self, shutdown: &ShutdownManager) -> Result<u64> {
        self.state = RunState::Running;
        let interval = self.tick_interval();
        tracing::info!(
            interval_ms = interval.as_millis() as u64,
            motion_scale = self.config.driver.motion_scale,
            max_ticks = ?self.config.driver.max_ticks,
            "Scene feed started"
        );

        let result = loop {
            if shutdown.is_shutdown_requested() || self.tick_budget_spent() {
                break Ok(());
            }
            if let Err(e) = self.step().await {
                let disconnected = e
                    .downcast_ref::<EmitError>()
                    .is_some_and(EmitError::is_disconnect);
                if disconnected {
                    tracing::error!(error = %e, "Record consumer went away, stopping");
                } else {
                    tracing::error!(error = %e, "Failed to emit scene record, stopping");
                }
                break Err(e);
            }
            if self.tick_budget_spent() {
                break Ok(());
            }
            shutdown.sleep(interval).await;
        };

        self.state = RunState::Terminated;
        let ticks = self.metrics.tick_count();
        tracing::info!(
            ticks,
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Scene feed stopped"
        );
        result.map(|()| ticks)
    }
}

/// Runs a driver on its own task, delivering records through a bounded
/// channel. Dropping the receiver stops the driver with an error.
pub fn spawn_feed(
    config: AppConfig,
    capacity: usize,
    shutdown: ShutdownManager,
) -> Result<(JoinHandle<Result<u64>>, mpsc::Receiver<String>)> {
    let (sink, rx) = ChannelSink::channel(capacity);
    let mut driver = Driver::new(config, sink)?;
    let handle = tokio::spawn(async move { driver.run(&shutdown).await });
    Ok((handle, rx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sink::WriterSink;

    fn quick_config(ticks: Option<u64>) -> AppConfig {
        let mut config = AppConfig::default();
        config.scene.seed = Some(11);
        config.driver.tick_interval_ms = 1;
        config.driver.max_ticks = ticks;
        config
    }

    #[tokio::test]
    async fn test_run_stops_at_tick_budget() {
        let mut driver = Driver::new(quick_config(Some(5)), WriterSink::new(Vec::new())).unwrap();
        let ticks = driver.run(&ShutdownManager::new()).await.unwrap();
        assert_eq!(ticks, 5);
        assert_eq!(driver.state, RunState::Terminated);

        let out = String::from_utf8(driver.emitter.sink().get_ref().clone()).unwrap();
        assert_eq!(out.lines().count(), 5);
    }

    #[tokio::test]
    async fn test_zero_tick_budget_emits_nothing() {
        let config = quick_config(Some(0));
        assert!(config.validate().is_ok());
        let mut driver = Driver::new(config, WriterSink::new(Vec::new())).unwrap();
        let ticks = driver.run(&ShutdownManager::new()).await.unwrap();
        assert_eq!(ticks, 0);
        assert!(driver.emitter.sink().get_ref().is_empty());
        assert_eq!(driver.emitter.emitted(), 0);
        assert_eq!(driver.state, RunState::Terminated);
    }

    #[tokio::test]
    async fn test_run_honours_prior_shutdown() {
        let shutdown = ShutdownManager::new();
        shutdown.request_shutdown();
        let mut driver = Driver::new(quick_config(None), WriterSink::new(Vec::new())).unwrap();
        assert_eq!(driver.run(&shutdown).await.unwrap(), 0);
        assert_eq!(driver.state, RunState::Terminated);
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let mut config = quick_config(None);
        config.scene.width = -1.0;
        assert!(Driver::new(config, WriterSink::new(Vec::new())).is_err());
    }

    #[tokio::test]
    async fn test_spawn_feed_stops_on_request() {
        let shutdown = ShutdownManager::new();
        let (handle, mut rx) = spawn_feed(quick_config(None), 8, shutdown.clone()).unwrap();
        for _ in 0..3 {
            assert!(rx.recv().await.is_some());
        }
        shutdown.request_shutdown();
        // keep draining so a blocked send can complete
        let drain = tokio::spawn(async move { while rx.recv().await.is_some() {} });
        let ticks = handle.await.unwrap().unwrap();
        assert!(ticks >= 3);
        drain.await.unwrap();
    }

    #[tokio::test]
    async fn test_dropped_receiver_is_fatal() {
        let (handle, rx) = spawn_feed(quick_config(None), 1, ShutdownManager::new()).unwrap();
        drop(rx);
        let err = handle.await.unwrap().unwrap_err();
        assert!(err
            .downcast_ref::<EmitError>()
            .is_some_and(EmitError::is_disconnect));
    }
}
