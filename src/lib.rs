//! # Tasq - Task Scheduling Queue
//!
//! A command-line personal task scheduler: manage tasks with due dates,
//! due times, and priorities, and get reminded when they are due soon.
//!
//! ## Features
//!
//! - **Task Management**: Add, update, and delete tasks with partial updates
//! - **Canonical Ordering**: Views sorted by due date, due time, then priority
//! - **Due-Soon Reminders**: A background scanner announces tasks due within
//!   the reminder window
//! - **JSON Persistence**: Tasks survive restarts via atomic file rewrites
//! - **Interactive Session**: A menu-driven mode with the scanner running
//!   alongside
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasq::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
