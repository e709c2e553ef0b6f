//! The interactive session: a foreground menu loop with the reminder
//! scanner running in the background.
//!
//! Both activities share one [`TaskStore`]. The menu handlers mutate it;
//! the scanner only reads point-in-time snapshots, so a scan landing in
//! the middle of an add or delete sees either the old or the new
//! collection, never a partially mutated one.
//!
//! Choosing Exit signals the scanner through a watch channel and awaits
//! its join handle before the final save, so no scan can race the
//! shutdown persist.

use crate::commands::task;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::reminder::Reminder;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use std::sync::Arc;
use tokio::sync::watch;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let store = Arc::new(TaskStore::new()?);

    let reminder_config = config.reminder.unwrap_or_default();
    msg_info!(Message::ScannerStarted {
        scan_interval: reminder_config.scan_interval,
        window: reminder_config.window,
    });

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scanner_store = store.clone();
    let scanner = tokio::spawn(async move {
        Reminder::new(reminder_config, scanner_store).run(shutdown_rx).await;
    });

    msg_print!(Message::SessionHeader, true);
    let options = vec!["Add task", "Update task", "Delete task", "View tasks", "Exit"];
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectMenuAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => task::handle_add(&store, Default::default())?,
            1 => task::handle_update(&store, Default::default())?,
            2 => task::handle_delete(&store, Default::default())?,
            3 => task::handle_list(&store)?,
            _ => break,
        }
    }

    // Stop the scanner and wait for any in-flight scan to finish before
    // the final persist.
    msg_info!(Message::ScannerShuttingDown);
    let _ = shutdown_tx.send(true);
    let _ = scanner.await;

    store.save()?;
    msg_success!(Message::SessionEnded);
    Ok(())
}
