//! Periodic autosave trigger
//!
//! A background thread sleeps for the configured period and posts
//! `AppMsg::AutosaveTick` onto the front-end's message channel. The thread
//! never touches editor state; the tick is handled on the event thread like
//! any other message, so saves never run concurrently with edits.

use std::io;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::messages::{AppMsg, Msg};

/// Default period between autosave checks
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(60);

/// Posts autosave ticks at a fixed interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveScheduler {
    interval: Duration,
}

impl AutosaveScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The message posted on every tick
    pub fn tick() -> Msg {
        Msg::App(AppMsg::AutosaveTick)
    }

    /// Start ticking into `tx`
    ///
    /// Runs until the receiving side of the channel is dropped.
    pub fn spawn<T>(self, tx: Sender<T>) -> io::Result<JoinHandle<()>>
    where
        T: From<Msg> + Send + 'static,
    {
        let interval = self.interval;
        tracing::info!(interval_secs = interval.as_secs(), "autosave scheduler started");
        thread::Builder::new()
            .name("autosave".to_string())
            .spawn(move || loop {
                thread::sleep(interval);
                if tx.send(T::from(Self::tick())).is_err() {
                    tracing::debug!("autosave channel closed, stopping");
                    break;
                }
            })
    }
}

impl Default for AutosaveScheduler {
    fn default() -> Self {
        Self::new(AUTOSAVE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_default_interval_is_one_minute() {
        assert_eq!(AutosaveScheduler::default().interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_spawn_posts_ticks() {
        let (tx, rx) = mpsc::channel::<Msg>();
        let handle = AutosaveScheduler::new(Duration::from_millis(5))
            .spawn(tx)
            .unwrap();

        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first, Msg::App(AppMsg::AutosaveTick));
        assert_eq!(second, Msg::App(AppMsg::AutosaveTick));

        drop(rx);
        handle.join().unwrap();
    }
}
