//! Status refresh timer.
//!
//! Drives [`ClientSettingsDialog::on_timer_status`] at a fixed interval on
//! the current thread. Must be called from within a `tokio::task::LocalSet`.

use crate::settings_dialog::ClientSettingsDialog;
use jamlink_core::{ClientModel, Shared};
use std::rc::Rc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Start refreshing the dialog's status every `period`.
///
/// The first refresh happens one period after the call. The timer stops when
/// the returned handle is aborted or the dialog is dropped. A tick that finds
/// the dialog already borrowed is skipped.
pub fn spawn_status_timer<C>(
    dialog: &Shared<ClientSettingsDialog<C>>,
    period: Duration,
) -> JoinHandle<()>
where
    C: ClientModel + 'static,
{
    let dialog = Rc::downgrade(dialog);

    tokio::task::spawn_local(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let Some(dialog) = dialog.upgrade() else {
                debug!("Settings dialog closed, stopping status timer");
                break;
            };

            match dialog.try_borrow_mut() {
                Ok(mut dialog) => dialog.on_timer_status(),
                Err(_) => debug!("Settings dialog busy, skipping status refresh"),
            };
        }
    })
}
