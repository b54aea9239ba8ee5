//! Countdown timer background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::{AppState, TickOutcome};

/// Cadence of the countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that ticks the timer once per second while it is running
///
/// The one-second schedule exists only while the running flag is set: it is
/// created on the transition to running and dropped as soon as the flag clears
/// (pause, reset or expiry).
pub async fn countdown_task(state: Arc<AppState>) {
    info!("Starting countdown task");

    let mut running_rx = state.running_tx.subscribe();

    loop {
        if !*running_rx.borrow_and_update() {
            // Wait for the timer to be started
            if running_rx.changed().await.is_err() {
                debug!("Running channel closed, stopping countdown task");
                return;
            }
            continue;
        }

        debug!("Timer running, scheduling ticks");
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match state.tick_timer() {
                        Ok(TickOutcome::Ticked(remaining)) => {
                            debug!("{}s remaining", remaining);
                        }
                        Ok(TickOutcome::Expired) => {
                            info!("Countdown finished");
                            break;
                        }
                        Ok(TickOutcome::Idle) => break,
                        Err(e) => {
                            error!("Failed to tick timer: {}", e);
                            break;
                        }
                    }
                }

                changed = running_rx.changed() => {
                    if changed.is_err() {
                        debug!("Running channel closed, stopping countdown task");
                        return;
                    }
                    if !*running_rx.borrow_and_update() {
                        info!("Timer stopped, cancelling tick schedule");
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NotificationKind;

    fn state(minutes: i64) -> Arc<AppState> {
        Arc::new(AppState::new(0, "127.0.0.1".to_string(), minutes))
    }

    #[tokio::test(start_paused = true)]
    async fn test_counts_down_and_expires_once() {
        let state = state(1);
        let task = tokio::spawn(countdown_task(Arc::clone(&state)));

        state.start_timer().unwrap();
        tokio::time::sleep(Duration::from_millis(30_500)).await;
        assert_eq!(state.get_timer_state().unwrap().remaining_seconds, 30);

        tokio::time::sleep(Duration::from_secs(60)).await;
        let timer = state.get_timer_state().unwrap();
        assert_eq!(timer.remaining_seconds, 0);
        assert!(!timer.running);

        let notifications = state.take_notifications().unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::TimerExpired);

        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_ticking() {
        let state = state(1);
        let task = tokio::spawn(countdown_task(Arc::clone(&state)));

        state.start_timer().unwrap();
        tokio::time::sleep(Duration::from_millis(10_500)).await;
        state.pause_timer().unwrap();

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(state.get_timer_state().unwrap().remaining_seconds, 50);

        state.start_timer().unwrap();
        tokio::time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(state.get_timer_state().unwrap().remaining_seconds, 45);

        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_schedule() {
        let state = state(2);
        let task = tokio::spawn(countdown_task(Arc::clone(&state)));

        state.start_timer().unwrap();
        tokio::time::sleep(Duration::from_millis(3_500)).await;
        state.reset_timer().unwrap();

        tokio::time::sleep(Duration::from_secs(10)).await;
        let timer = state.get_timer_state().unwrap();
        assert!(!timer.running);
        assert_eq!(timer.remaining_seconds, 120);

        task.abort();
    }
}
