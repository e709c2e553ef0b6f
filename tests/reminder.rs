#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
    use std::sync::Arc;
    use tasq::libs::config::ReminderConfig;
    use tasq::libs::reminder::{due_soon, Reminder};
    use tasq::libs::store::TaskStore;
    use tasq::libs::task::{Priority, Task};
    use tokio::sync::watch;

    fn task(name: &str, date: &str, time: &str) -> Task {
        Task::new(
            name,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            Priority::Medium,
        )
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_time(NaiveTime::parse_from_str(time, "%H:%M").unwrap())
    }

    #[test]
    fn test_task_inside_window_is_due_soon() {
        let tasks = vec![task("Soon", "2025-05-01", "10:04")];
        let due = due_soon(&tasks, at("2025-05-01", "10:00"), Duration::minutes(5));

        assert_eq!(due.len(), 1);
        assert_eq!(due[0].name, "Soon");
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let tasks = vec![task("Boundary", "2025-05-01", "10:05")];
        let due = due_soon(&tasks, at("2025-05-01", "10:00"), Duration::minutes(5));

        assert_eq!(due.len(), 1);
    }

    #[test]
    fn test_task_beyond_window_is_not_due_soon() {
        let tasks = vec![task("Later", "2025-05-01", "10:06")];
        let due = due_soon(&tasks, at("2025-05-01", "10:00"), Duration::minutes(5));

        assert!(due.is_empty());
    }

    #[test]
    fn test_past_due_task_is_not_announced() {
        let tasks = vec![task("Missed", "2025-05-01", "09:59")];
        let due = due_soon(&tasks, at("2025-05-01", "10:00"), Duration::minutes(5));

        assert!(due.is_empty());
    }

    #[test]
    fn test_task_due_exactly_now_is_not_announced() {
        let tasks = vec![task("Now", "2025-05-01", "10:00")];
        let due = due_soon(&tasks, at("2025-05-01", "10:00"), Duration::minutes(5));

        assert!(due.is_empty());
    }

    #[test]
    fn test_same_time_tomorrow_is_outside_window() {
        let tasks = vec![task("Tomorrow", "2025-05-02", "10:02")];
        let due = due_soon(&tasks, at("2025-05-01", "10:00"), Duration::minutes(5));

        assert!(due.is_empty());
    }

    #[test]
    fn test_empty_collection_yields_no_reminders() {
        let due = due_soon(&[], at("2025-05-01", "10:00"), Duration::minutes(5));
        assert!(due.is_empty());
    }

    #[test]
    fn test_reminders_repeat_across_scans() {
        // No de-duplication: a task inside the window is announced on
        // every scan until it leaves the window.
        let tasks = vec![task("Nagging", "2025-05-01", "10:04")];

        let first = due_soon(&tasks, at("2025-05-01", "10:00"), Duration::minutes(5));
        let second = due_soon(&tasks, at("2025-05-01", "10:00"), Duration::minutes(5));
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);

        // Once past due, the announcements stop.
        let after = due_soon(&tasks, at("2025-05-01", "10:04"), Duration::minutes(5));
        assert!(after.is_empty());
    }

    #[tokio::test]
    async fn test_scanner_stops_when_signalled() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(TaskStore::with_path(dir.path().join("tasks.json")).unwrap());

        let config = ReminderConfig {
            scan_interval: 1,
            window: 5,
        };
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            Reminder::new(config, store).run(shutdown_rx).await;
        });

        shutdown_tx.send(true).unwrap();

        tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("scanner did not stop after shutdown signal")
            .unwrap();
    }

    #[tokio::test]
    async fn test_scanner_stops_when_sender_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(TaskStore::with_path(dir.path().join("tasks.json")).unwrap());

        let config = ReminderConfig {
            scan_interval: 1,
            window: 5,
        };
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            Reminder::new(config, store).run(shutdown_rx).await;
        });

        drop(shutdown_tx);

        tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("scanner did not stop after sender was dropped")
            .unwrap();
    }
}
