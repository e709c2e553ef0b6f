//! Task CRUD handlers shared by the subcommands and the interactive
//! session.
//!
//! Every value can arrive either as a command-line argument or through a
//! prompt. Typing `exit` (any case) at a free-text prompt cancels the
//! whole operation without committing anything. On update, a field that
//! fails to parse is reported and skipped while the remaining valid
//! fields still commit; on add, a bad field aborts the operation before
//! any state change.

use crate::libs::formatter::{parse_date, parse_time};
use crate::libs::messages::Message;
use crate::libs::ordering;
use crate::libs::store::{StoreError, TaskStore};
use crate::libs::task::{Priority, Task, TaskPatch};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::str::FromStr;

/// Sentinel recognized at any free-text prompt to abort the current
/// operation.
const EXIT_SENTINEL: &str = "exit";

#[derive(Debug, Args, Default)]
pub struct AddArgs {
    /// Task name
    name: Option<String>,
    /// Due date (yyyy-mm-dd)
    #[arg(short, long)]
    date: Option<String>,
    /// Due time (HH:MM)
    #[arg(short, long)]
    time: Option<String>,
    /// Priority: 1-High, 2-Medium, 3-Low
    #[arg(short, long)]
    priority: Option<String>,
}

#[derive(Debug, Args, Default)]
pub struct UpdateArgs {
    /// Name of the task to update
    name: Option<String>,
    /// New task name
    #[arg(long)]
    rename: Option<String>,
    /// New due date (yyyy-mm-dd)
    #[arg(short, long)]
    date: Option<String>,
    /// New due time (HH:MM)
    #[arg(short, long)]
    time: Option<String>,
    /// New priority: 1-High, 2-Medium, 3-Low
    #[arg(short, long)]
    priority: Option<String>,
}

#[derive(Debug, Args, Default)]
pub struct DeleteArgs {
    /// Name of the task to delete
    name: Option<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn add(args: AddArgs) -> Result<()> {
    let store = TaskStore::new()?;
    handle_add(&store, args)
}

pub fn update(args: UpdateArgs) -> Result<()> {
    let store = TaskStore::new()?;
    handle_update(&store, args)
}

pub fn delete(args: DeleteArgs) -> Result<()> {
    let store = TaskStore::new()?;
    handle_delete(&store, args)
}

pub fn list() -> Result<()> {
    let store = TaskStore::new()?;
    handle_list(&store)
}

pub fn handle_add(store: &TaskStore, args: AddArgs) -> Result<()> {
    // A blank name from the command line falls back to the prompt; task
    // names are never empty.
    let name_arg = args.name.filter(|name| !name.trim().is_empty());
    let Some(name) = value_or_prompt(name_arg, Message::PromptTaskName, false)? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };

    let Some(date_input) = value_or_prompt(args.date, Message::PromptDueDate, false)? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };
    let due_date = match parse_date(&date_input) {
        Ok(date) => date,
        Err(_) => {
            msg_error!(Message::InvalidDate(date_input.trim().to_string()));
            return Ok(());
        }
    };

    let Some(time_input) = value_or_prompt(args.time, Message::PromptDueTime, false)? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };
    let due_time = match parse_time(&time_input) {
        Ok(time) => time,
        Err(_) => {
            msg_error!(Message::InvalidTime(time_input.trim().to_string()));
            return Ok(());
        }
    };

    let Some(priority_input) = value_or_prompt(args.priority, Message::PromptPriority, false)? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };
    let priority = match Priority::from_str(&priority_input) {
        Ok(priority) => priority,
        Err(_) => {
            msg_error!(Message::InvalidPriority(priority_input.trim().to_string()));
            return Ok(());
        }
    };

    let name = name.trim().to_string();
    store.add(Task::new(&name, due_date, due_time, priority))?;
    msg_success!(Message::TaskAdded(name));
    Ok(())
}

pub fn handle_update(store: &TaskStore, args: UpdateArgs) -> Result<()> {
    let name_arg = args.name.filter(|name| !name.trim().is_empty());
    let Some(name) = value_or_prompt(name_arg, Message::PromptTaskNameToUpdate, false)? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };
    if store.find(&name).is_none() {
        msg_error!(Message::TaskNotFound(name.trim().to_string()));
        return Ok(());
    }

    // Flags make the update non-interactive; otherwise every field is
    // prompted and an empty answer keeps the current value.
    let interactive = args.rename.is_none() && args.date.is_none() && args.time.is_none() && args.priority.is_none();
    let (rename, date_input, time_input, priority_input) = if interactive {
        let Some(rename) = prompt_keep_empty(Message::PromptNewTaskName)? else {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        };
        let Some(date) = prompt_keep_empty(Message::PromptNewDueDate)? else {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        };
        let Some(time) = prompt_keep_empty(Message::PromptNewDueTime)? else {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        };
        let Some(priority) = prompt_keep_empty(Message::PromptNewPriority)? else {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        };
        (rename, date, time, priority)
    } else {
        (
            args.rename.unwrap_or_default(),
            args.date.unwrap_or_default(),
            args.time.unwrap_or_default(),
            args.priority.unwrap_or_default(),
        )
    };

    // Each field validates independently: a bad token is reported and
    // skipped, the remaining fields still commit.
    let mut patch = TaskPatch::default();
    if !rename.trim().is_empty() {
        patch.name = Some(rename.trim().to_string());
    }
    if !date_input.trim().is_empty() {
        match parse_date(&date_input) {
            Ok(date) => patch.due_date = Some(date),
            Err(_) => msg_error!(Message::InvalidDate(date_input.trim().to_string())),
        }
    }
    if !time_input.trim().is_empty() {
        match parse_time(&time_input) {
            Ok(time) => patch.due_time = Some(time),
            Err(_) => msg_error!(Message::InvalidTime(time_input.trim().to_string())),
        }
    }
    if !priority_input.trim().is_empty() {
        match Priority::from_str(&priority_input) {
            Ok(priority) => patch.priority = Some(priority),
            Err(_) => msg_error!(Message::InvalidPriority(priority_input.trim().to_string())),
        }
    }

    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match store.update(&name, &patch) {
        Ok(()) => {
            msg_success!(Message::TaskUpdated(name.trim().to_string()));
            Ok(())
        }
        Err(StoreError::NotFound(_)) => {
            msg_error!(Message::TaskNotFound(name.trim().to_string()));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

pub fn handle_delete(store: &TaskStore, args: DeleteArgs) -> Result<()> {
    let name_arg = args.name.filter(|name| !name.trim().is_empty());
    let Some(name) = value_or_prompt(name_arg, Message::PromptTaskNameToDelete, false)? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };
    if store.find(&name).is_none() {
        msg_error!(Message::TaskNotFound(name.trim().to_string()));
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(name.trim().to_string()).to_string())
            .default(true)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match store.delete(&name) {
        Ok(()) => {
            msg_success!(Message::TaskDeleted(name.trim().to_string()));
            Ok(())
        }
        Err(StoreError::NotFound(_)) => {
            msg_error!(Message::TaskNotFound(name.trim().to_string()));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

pub fn handle_list(store: &TaskStore) -> Result<()> {
    let tasks = store.snapshot();
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TaskListHeader, true);
    View::tasks(&ordering::canonical_order(tasks))
}

/// Takes the value from the command line or prompts for it; returns
/// `None` when the user cancels with the exit sentinel.
fn value_or_prompt(value: Option<String>, prompt: Message, allow_empty: bool) -> Result<Option<String>> {
    let input: String = match value {
        Some(value) => value,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .allow_empty(allow_empty)
            .interact_text()?,
    };

    if input.trim().eq_ignore_ascii_case(EXIT_SENTINEL) {
        return Ok(None);
    }
    Ok(Some(input))
}

/// Update-flow prompt where an empty answer means "keep the current
/// value".
fn prompt_keep_empty(prompt: Message) -> Result<Option<String>> {
    value_or_prompt(None, prompt, true)
}
