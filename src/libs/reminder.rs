//! The background reminder scanner.
//!
//! A cancellable periodic task that wakes on a fixed interval, takes a
//! point-in-time snapshot of the task store, and announces every task
//! whose due instant falls inside the due-soon window. Reminders are not
//! de-duplicated across cycles: a task stays announced on every scan
//! until it leaves the window.
//!
//! The scanner never mutates the store. Shutdown is cooperative: the
//! caller flips a `watch` channel and awaits the scanner's join handle,
//! which guarantees no scan is in flight when the final save runs.

use crate::libs::config::ReminderConfig;
use crate::libs::formatter::format_due;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::Task;
use crate::{msg_debug, msg_print};
use chrono::{Duration, Local, NaiveDateTime};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};

pub struct Reminder {
    config: ReminderConfig,
    store: Arc<TaskStore>,
}

impl Reminder {
    pub fn new(config: ReminderConfig, store: Arc<TaskStore>) -> Self {
        Reminder { config, store }
    }

    /// Runs the scan loop until the shutdown channel is flipped or its
    /// sender is dropped.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = time::interval(time::Duration::from_secs(self.config.scan_interval.max(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.scan(Local::now().naive_local());
                }
                changed = shutdown.changed() => {
                    match changed {
                        Ok(()) if !*shutdown.borrow() => continue,
                        _ => break,
                    }
                }
            }
        }
    }

    /// Inspects a snapshot of the store and announces due-soon tasks.
    fn scan(&self, now: NaiveDateTime) {
        let tasks = self.store.snapshot();
        let window = Duration::minutes(self.config.window as i64);
        let due = due_soon(&tasks, now, window);
        msg_debug!(format!("reminder scan: {} of {} task(s) due soon", due.len(), tasks.len()));
        for task in due {
            msg_print!(Message::ReminderDue {
                name: task.name.clone(),
                due: format_due(&task.due_date, &task.due_time),
            });
        }
    }
}

/// Selects the tasks whose due instant lies strictly after `now` and at
/// most `window` ahead. Already-due tasks are never announced.
pub fn due_soon<'a>(tasks: &'a [Task], now: NaiveDateTime, window: Duration) -> Vec<&'a Task> {
    let horizon = now + window;
    tasks.iter().filter(|task| task.due_at() > now && task.due_at() <= horizon).collect()
}
