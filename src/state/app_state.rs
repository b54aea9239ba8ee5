//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use crate::error::{PadError, PadResult};
use super::{DocumentStore, Notification, NotificationLog, TickOutcome, TimerState};

/// Application state: the document store, the timer and the host-facing channels
///
/// The two stores are independent; nothing here couples a timer change to a
/// document change.
#[derive(Debug)]
pub struct AppState {
    /// Tabs and their text
    pub documents: Arc<Mutex<DocumentStore>>,
    /// Countdown timer
    pub timer: Arc<Mutex<TimerState>>,
    /// Notifications waiting for the host
    pub notifications: Arc<Mutex<NotificationLog>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Running flag, drives the countdown task
    pub running_tx: watch::Sender<bool>,
    /// Keep the receiver alive to prevent channel closure
    pub _running_rx: watch::Receiver<bool>,
    /// Timer snapshots after every change
    pub timer_update_tx: watch::Sender<TimerState>,
    pub _timer_update_rx: watch::Receiver<TimerState>,
    /// Live notification feed
    pub notification_tx: broadcast::Sender<Notification>,
}

impl AppState {
    /// Create an AppState with the seeded document and a paused timer
    pub fn new(port: u16, host: String, minutes: i64) -> Self {
        let timer = TimerState::new(minutes);
        let (running_tx, running_rx) = watch::channel(false);
        let (timer_update_tx, timer_update_rx) = watch::channel(timer.clone());
        let (notification_tx, _) = broadcast::channel(100);

        Self {
            documents: Arc::new(Mutex::new(DocumentStore::new())),
            timer: Arc::new(Mutex::new(timer)),
            notifications: Arc::new(Mutex::new(NotificationLog::new())),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            running_tx,
            _running_rx: running_rx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
            notification_tx,
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Run `updater` against the document store
    ///
    /// The action is recorded only when the updater succeeds.
    pub fn with_documents<F, R>(&self, action: &str, updater: F) -> PadResult<R>
    where
        F: FnOnce(&mut DocumentStore) -> PadResult<R>,
    {
        let mut store = self.documents.lock()
            .map_err(|_| PadError::Poisoned("document"))?;

        let result = updater(&mut *store);
        drop(store);

        match &result {
            Ok(_) => self.record_action(action),
            Err(e) => warn!("Rejected {}: {}", action, e),
        }
        result
    }

    /// Read the document store without recording an action
    pub fn read_documents<F, R>(&self, reader: F) -> PadResult<R>
    where
        F: FnOnce(&DocumentStore) -> R,
    {
        self.documents.lock()
            .map(|store| reader(&*store))
            .map_err(|_| PadError::Poisoned("document"))
    }

    /// Apply `updater` to the timer and publish the new snapshot
    fn update_timer<F, R>(&self, updater: F) -> PadResult<(R, TimerState)>
    where
        F: FnOnce(&mut TimerState) -> R,
    {
        let mut timer = self.timer.lock()
            .map_err(|_| PadError::Poisoned("timer"))?;

        let result = updater(&mut *timer);
        let snapshot = timer.clone();
        drop(timer);

        // Only notify the countdown task on an actual transition
        self.running_tx.send_if_modified(|running| {
            let changed = *running != snapshot.running;
            *running = snapshot.running;
            changed
        });
        if let Err(e) = self.timer_update_tx.send(snapshot.clone()) {
            warn!("Failed to send timer update: {}", e);
        }

        Ok((result, snapshot))
    }

    /// Apply a user timer action, recording it only when it goes through
    fn timer_action<F, R>(&self, action: &str, updater: F) -> PadResult<TimerState>
    where
        F: FnOnce(&mut TimerState) -> R,
    {
        let (_, snapshot) = self.update_timer(updater)
            .inspect_err(|e| warn!("Rejected {}: {}", action, e))?;
        self.record_action(action);
        Ok(snapshot)
    }

    pub fn start_timer(&self) -> PadResult<TimerState> {
        self.timer_action("timer-start", TimerState::start)
    }

    pub fn pause_timer(&self) -> PadResult<TimerState> {
        self.timer_action("timer-pause", TimerState::pause)
    }

    pub fn reset_timer(&self) -> PadResult<TimerState> {
        self.timer_action("timer-reset", TimerState::reset)
    }

    pub fn set_timer_minutes(&self, minutes: i64) -> PadResult<TimerState> {
        self.timer_action("timer-minutes", |timer| timer.set_configured_minutes(minutes))
    }

    /// Advance the timer one second; raises the expiry notification when it hits zero
    pub fn tick_timer(&self) -> PadResult<TickOutcome> {
        let (outcome, _) = self.update_timer(TimerState::tick)?;
        if outcome == TickOutcome::Expired {
            self.notify(Notification::timer_expired())?;
        }
        Ok(outcome)
    }

    pub fn get_timer_state(&self) -> PadResult<TimerState> {
        self.timer.lock()
            .map(|timer| timer.clone())
            .map_err(|_| PadError::Poisoned("timer"))
    }

    /// Queue a notification for the host and broadcast it to live listeners
    pub fn notify(&self, notification: Notification) -> PadResult<()> {
        info!("Notification: {}", notification.message);

        self.notifications.lock()
            .map_err(|_| PadError::Poisoned("notification"))?
            .push(notification.clone());

        // No live subscribers is fine, the queue still holds it
        let _ = self.notification_tx.send(notification);
        Ok(())
    }

    /// Take every queued notification
    pub fn take_notifications(&self) -> PadResult<Vec<Notification>> {
        self.notifications.lock()
            .map(|mut log| log.drain())
            .map_err(|_| PadError::Poisoned("notification"))
    }

    /// Number of notifications waiting to be taken
    pub fn pending_notifications(&self) -> PadResult<usize> {
        self.notifications.lock()
            .map(|log| log.len())
            .map_err(|_| PadError::Poisoned("notification"))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
