#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskNotFound(String),
    NoTasksFound,
    TaskListHeader,
    NoChangesDetected,
    ConfirmDeleteTask(String),

    // === INPUT MESSAGES ===
    InvalidDate(String),
    InvalidTime(String),
    InvalidPriority(String),
    OperationCancelled,

    // === REMINDER MESSAGES ===
    ReminderDue { name: String, due: String },
    ScannerStarted { scan_interval: u64, window: u64 },
    ScannerStopped,
    ScannerShuttingDown,
    ScannerReceivedCtrlC,
    ScannerCtrlCListenFailed(String),

    // === SESSION MESSAGES ===
    SessionHeader,
    SelectMenuAction,
    SessionEnded,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleReminder,

    // === FILE SYSTEM MESSAGES ===
    TaskFileUnreadable(String),

    // === PROMPTS ===
    PromptTaskName,
    PromptDueDate,
    PromptDueTime,
    PromptPriority,
    PromptNewTaskName,
    PromptNewDueDate,
    PromptNewDueTime,
    PromptNewPriority,
    PromptTaskNameToUpdate,
    PromptTaskNameToDelete,
    PromptScanInterval,
    PromptReminderWindow,
}
