//! Display implementation for tasq application messages.
//!
//! All user-facing text lives in this one match, so wording stays
//! consistent and the `Message` variants remain the single source of
//! truth for what the application says.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(name) => format!("Task '{}' added successfully", name),
            Message::TaskUpdated(name) => format!("Task '{}' updated successfully", name),
            Message::TaskDeleted(name) => format!("Task '{}' deleted successfully", name),
            Message::TaskNotFound(name) => format!("Task '{}' not found", name),
            Message::NoTasksFound => "No tasks available".to_string(),
            Message::TaskListHeader => "📋 Task list".to_string(),
            Message::NoChangesDetected => "No changes detected, task left unchanged".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),

            // === INPUT MESSAGES ===
            Message::InvalidDate(input) => format!("Invalid date '{}': expected format yyyy-mm-dd", input),
            Message::InvalidTime(input) => format!("Invalid time '{}': expected format HH:MM", input),
            Message::InvalidPriority(input) => format!("Invalid priority '{}': expected 1 (High), 2 (Medium) or 3 (Low)", input),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === REMINDER MESSAGES ===
            Message::ReminderDue { name, due } => format!("⏰ Reminder: task '{}' is due at {}", name, due),
            Message::ScannerStarted { scan_interval, window } => {
                format!("Reminder scanner started: scanning every {}s, due-soon window {} min", scan_interval, window)
            }
            Message::ScannerStopped => "Reminder scanner stopped".to_string(),
            Message::ScannerShuttingDown => "Shutting down reminder scanner...".to_string(),
            Message::ScannerReceivedCtrlC => "Received Ctrl+C, stopping...".to_string(),
            Message::ScannerCtrlCListenFailed(err) => format!("Failed to listen for Ctrl+C: {}", err),

            // === SESSION MESSAGES ===
            Message::SessionHeader => "🗓️ tasq - personal task scheduler".to_string(),
            Message::SelectMenuAction => "Choose an option".to_string(),
            Message::SessionEnded => "Tasks saved. Goodbye!".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleReminder => "Reminder scanner settings".to_string(),

            // === FILE SYSTEM MESSAGES ===
            Message::TaskFileUnreadable(err) => format!("Task file could not be parsed, starting with an empty list: {}", err),

            // === PROMPTS ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptDueDate => "Due date (yyyy-mm-dd)".to_string(),
            Message::PromptDueTime => "Due time (HH:MM)".to_string(),
            Message::PromptPriority => "Priority (1-High, 2-Medium, 3-Low)".to_string(),
            Message::PromptNewTaskName => "New task name (leave empty to keep)".to_string(),
            Message::PromptNewDueDate => "New due date (yyyy-mm-dd, leave empty to keep)".to_string(),
            Message::PromptNewDueTime => "New due time (HH:MM, leave empty to keep)".to_string(),
            Message::PromptNewPriority => "New priority (1-3, leave empty to keep)".to_string(),
            Message::PromptTaskNameToUpdate => "Name of the task to update".to_string(),
            Message::PromptTaskNameToDelete => "Name of the task to delete".to_string(),
            Message::PromptScanInterval => "Scan interval in seconds".to_string(),
            Message::PromptReminderWindow => "Due-soon window in minutes".to_string(),
        };

        write!(f, "{}", message)
    }
}
