//! Runs the reminder scanner in the foreground until interrupted.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::reminder::Reminder;
use crate::libs::store::TaskStore;
use crate::{msg_error, msg_info};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let store = Arc::new(TaskStore::new()?);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Ctrl+C flips the shutdown channel; the scan loop finishes its
    // current cycle and exits.
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                msg_info!(Message::ScannerReceivedCtrlC);
            }
            Err(err) => {
                msg_error!(Message::ScannerCtrlCListenFailed(err.to_string()));
            }
        }
        let _ = shutdown_tx.send(true);
    });

    let reminder_config = config.reminder.unwrap_or_default();
    msg_info!(Message::ScannerStarted {
        scan_interval: reminder_config.scan_interval,
        window: reminder_config.window,
    });

    Reminder::new(reminder_config, store).run(shutdown_rx).await;

    msg_info!(Message::ScannerStopped);
    Ok(())
}
