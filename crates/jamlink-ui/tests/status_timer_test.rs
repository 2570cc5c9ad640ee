mod common;

use common::{MockClient, RecordingPresenter};
use jamlink_core::constants::DISPLAY_UPDATE_TIME;
use jamlink_core::{shared, Shared};
use jamlink_ui::{spawn_status_timer, ClientSettingsDialog, DialogOptions};
use std::rc::Rc;
use std::time::Duration;
use tokio::task::LocalSet;
use tokio::time::sleep;

type SharedDialog = Shared<ClientSettingsDialog<MockClient>>;

fn open_shared(client: MockClient) -> (Shared<MockClient>, SharedDialog) {
    let client = shared(client);
    let dialog = ClientSettingsDialog::open(
        Rc::clone(&client),
        Box::new(RecordingPresenter::default()),
        DialogOptions::default(),
    );
    (client, shared(dialog))
}

#[tokio::test(start_paused = true)]
async fn test_timer_refreshes_status() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let (client, dialog) = open_shared(MockClient::running(20, 180));
            let handle = spawn_status_timer(&dialog, DISPLAY_UPDATE_TIME);

            sleep(Duration::from_millis(500)).await;
            assert!(dialog.borrow().view().status.is_cleared());

            sleep(Duration::from_millis(1000)).await;
            {
                let dialog = dialog.borrow();
                let status = &dialog.view().status;
                assert_eq!(status.ping_time.text, "20 ms");
                assert_eq!(status.upload_rate.text, "180 kbps");
            }

            client.borrow_mut().ping = Some(35);
            sleep(DISPLAY_UPDATE_TIME).await;
            assert_eq!(dialog.borrow().view().status.ping_time.text, "35 ms");
            assert_eq!(client.borrow().writes, 0);

            handle.abort();
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_timer_skips_tick_while_dialog_borrowed() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let (_client, dialog) = open_shared(MockClient::running(20, 180));
            let handle = spawn_status_timer(&dialog, DISPLAY_UPDATE_TIME);

            {
                let held = dialog.borrow_mut();
                sleep(Duration::from_millis(1500)).await;
                assert!(held.view().status.is_cleared());
            }

            sleep(DISPLAY_UPDATE_TIME).await;
            assert_eq!(dialog.borrow().view().status.ping_time.text, "20 ms");

            handle.abort();
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_timer_stops_when_dialog_dropped() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let (_client, dialog) = open_shared(MockClient::default());
            let handle = spawn_status_timer(&dialog, DISPLAY_UPDATE_TIME);

            drop(dialog);

            tokio::time::timeout(Duration::from_secs(5), handle)
                .await
                .expect("timer should stop after the dialog is dropped")
                .expect("timer task should not panic");
        })
        .await;
}
