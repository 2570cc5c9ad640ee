use jamlink::{
    init_logging, spawn_status_timer, ClientSettingsDialog, DialogOptions, FrameSizeFactor,
    LocalClient, LogPresenter, MessagePresenter, RfdPresenter, SettingsManager, SoundCardDevice,
    BUILD_DATE, VERSION,
};
use jamlink_core::constants::DISPLAY_UPDATE_TIME;
use jamlink_core::shared;
use std::path::PathBuf;
use std::rc::Rc;
use tokio::task::LocalSet;
use tracing::info;

/// Number of status refreshes to run before printing the snapshot
const STATUS_TICKS: u32 = 3;

/// Sound cards offered when no audio backend is attached
fn demo_devices() -> Vec<SoundCardDevice> {
    vec![
        SoundCardDevice::stereo("System Default"),
        SoundCardDevice::multichannel("USB Audio Interface", 8, 4)
            .with_supported_factors(&[FrameSizeFactor::Default, FrameSizeFactor::Safe]),
        SoundCardDevice::stereo("Bluetooth Headset")
            .with_supported_factors(&[])
            .with_native_buffer_size(512)
            .with_open_error("device is not available"),
    ]
}

fn presenter() -> Box<dyn MessagePresenter> {
    if std::env::var_os("JAMLINK_MESSAGE_BOXES").is_some() {
        Box::new(RfdPresenter)
    } else {
        Box::new(LogPresenter)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("jamlink {} (built {})", VERSION, BUILD_DATE);

    let path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            SettingsManager::ensure_config_dir()?;
            SettingsManager::config_file_path()?
        }
    };
    let settings = SettingsManager::load_or_default(&path)?;

    let client = shared(LocalClient::new(settings, demo_devices()));
    {
        let mut client = client.borrow_mut();
        for device in client.devices() {
            info!(
                "Sound card '{}': {} in, {} out",
                device.name,
                device.input_channels.len(),
                device.output_channels.len()
            );
        }
        client.set_running(true);
        client.set_ping_time_ms(24);
    }

    let dialog = shared(ClientSettingsDialog::open(
        Rc::clone(&client),
        presenter(),
        DialogOptions::default(),
    ));
    dialog
        .borrow()
        .on_change(|change| info!("Main window notified: {:?}", change));

    let local = LocalSet::new();
    local
        .run_until(async {
            let timer = spawn_status_timer(&dialog, DISPLAY_UPDATE_TIME);

            // the headset fails to open and the previous device is kept
            dialog.borrow_mut().on_soundcard_activated(2);

            tokio::time::sleep(DISPLAY_UPDATE_TIME * STATUS_TICKS).await;
            timer.abort();
        })
        .await;

    let snapshot = dialog.borrow().snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    SettingsManager::save(client.borrow().settings(), &path)?;
    info!("Settings saved to {}", path.display());

    Ok(())
}
