#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use std::cmp::Ordering;
    use tasq::libs::ordering::{canonical_order, compare};
    use tasq::libs::task::{Priority, Task};

    fn task(name: &str, date: &str, time: &str, priority: Priority) -> Task {
        Task::new(
            name,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            priority,
        )
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_orders_by_due_date_first() {
        let tasks = vec![
            task("Later", "2025-05-03", "08:00", Priority::High),
            task("Sooner", "2025-05-01", "18:00", Priority::Low),
            task("Middle", "2025-05-02", "12:00", Priority::Medium),
        ];

        assert_eq!(names(&canonical_order(tasks)), vec!["Sooner", "Middle", "Later"]);
    }

    #[test]
    fn test_due_time_breaks_date_tie() {
        // Same day: the 08:00 call comes before the 09:00 report even
        // though the report has the higher priority.
        let tasks = vec![
            task("Report", "2025-05-01", "09:00", Priority::High),
            task("Call", "2025-05-01", "08:00", Priority::Medium),
        ];

        assert_eq!(names(&canonical_order(tasks)), vec!["Call", "Report"]);
    }

    #[test]
    fn test_priority_breaks_date_and_time_tie() {
        let tasks = vec![
            task("Low", "2025-05-01", "09:00", Priority::Low),
            task("High", "2025-05-01", "09:00", Priority::High),
            task("Medium", "2025-05-01", "09:00", Priority::Medium),
        ];

        assert_eq!(names(&canonical_order(tasks)), vec!["High", "Medium", "Low"]);
    }

    #[test]
    fn test_earlier_date_beats_priority() {
        // Priority never outranks the date: a low-priority task due
        // tomorrow sorts before a high-priority task due next week.
        let tasks = vec![
            task("Urgent later", "2025-05-08", "08:00", Priority::High),
            task("Casual sooner", "2025-05-02", "20:00", Priority::Low),
        ];

        assert_eq!(names(&canonical_order(tasks)), vec!["Casual sooner", "Urgent later"]);
    }

    #[test]
    fn test_insertion_order_kept_among_full_ties() {
        let tasks = vec![
            task("first", "2025-05-01", "09:00", Priority::Medium),
            task("second", "2025-05-01", "09:00", Priority::Medium),
            task("third", "2025-05-01", "09:00", Priority::Medium),
        ];

        assert_eq!(names(&canonical_order(tasks)), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_stability_with_interleaved_ties() {
        // Tied pairs keep their relative order even when other elements
        // move around them.
        let tasks = vec![
            task("b1", "2025-05-02", "10:00", Priority::Medium),
            task("a", "2025-05-01", "10:00", Priority::Medium),
            task("b2", "2025-05-02", "10:00", Priority::Medium),
            task("c", "2025-05-03", "10:00", Priority::Medium),
            task("b3", "2025-05-02", "10:00", Priority::Medium),
        ];

        assert_eq!(names(&canonical_order(tasks)), vec!["a", "b1", "b2", "b3", "c"]);
    }

    #[test]
    fn test_compare_equal_keys() {
        let a = task("one", "2025-05-01", "09:00", Priority::High);
        let b = task("two", "2025-05-01", "09:00", Priority::High);

        // Names play no part in the ordering key.
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_empty_and_single_collections() {
        assert!(canonical_order(Vec::new()).is_empty());

        let single = vec![task("only", "2025-05-01", "09:00", Priority::Low)];
        assert_eq!(names(&canonical_order(single)), vec!["only"]);
    }
}
