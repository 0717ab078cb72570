//! Command runners
//!
//! Each runner builds the adapters it needs, drives the bridge or the
//! utilities, and maps the outcome to one of the `EXIT_*` codes.

use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use crate::application::ports::{ClipboardHost, ConfigStore};
use crate::application::{encode_png, ClipboardBridge, ClipboardImageProvider, Utils};
use crate::domain::clipboard::ImageSize;
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_clipboard_host, create_idle_monitor};

use super::args::Commands;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load the stored config over the defaults, falling back to the defaults
/// when the file cannot be read.
pub async fn load_config<S: ConfigStore>(store: &S, presenter: &Presenter) -> AppConfig {
    match store.load_effective().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("Ignoring config file: {}", e));
            AppConfig::defaults()
        }
    }
}

/// Run a clipboard or utility command. `Config` is handled by the caller.
pub async fn run_command(command: Commands, config: &AppConfig, presenter: &Presenter) -> u8 {
    match command {
        Commands::Bytes { bytes, precision } => {
            let utils = Utils::new(create_idle_monitor(), config.byte_precision_or_default());
            let formatted = match precision {
                Some(p) => utils.formatted_bytes(bytes, p),
                None => utils.bytes(bytes),
            };
            presenter.output(&formatted);
            EXIT_SUCCESS
        }
        Commands::Uuid => {
            let utils = Utils::new(create_idle_monitor(), config.byte_precision_or_default());
            presenter.output(&utils.uuid());
            EXIT_SUCCESS
        }
        Commands::Hsluv {
            hue,
            saturation,
            lightness,
            alpha,
        } => {
            let utils = Utils::new(create_idle_monitor(), config.byte_precision_or_default());
            presenter.output(&utils.hsluv(hue, saturation, lightness, alpha).to_hex());
            EXIT_SUCCESS
        }
        Commands::Idle => run_idle(config, presenter).await,
        Commands::Config { .. } => {
            presenter.error("config commands are handled separately");
            EXIT_USAGE_ERROR
        }
        clipboard_command => {
            let persist = persists_writes(&clipboard_command);
            let host = match create_clipboard_host(config.selection_or_default(), persist) {
                Ok(host) => host,
                Err(e) => {
                    presenter.error(&e.to_string());
                    return EXIT_ERROR;
                }
            };
            let bridge = Rc::new(ClipboardBridge::new(host));
            run_clipboard_command(clipboard_command, bridge, config, presenter).await
        }
    }
}

/// Run a command against an already constructed bridge
pub async fn run_clipboard_command<H: ClipboardHost>(
    command: Commands,
    bridge: Rc<ClipboardBridge<H>>,
    config: &AppConfig,
    presenter: &Presenter,
) -> u8 {
    match command {
        Commands::Get { selection } => {
            if selection {
                warn_if_no_selection(&bridge, presenter);
                presenter.output(&bridge.selection());
            } else {
                presenter.output(&bridge.text());
            }
            EXIT_SUCCESS
        }
        Commands::Set { text, selection } => {
            if selection {
                warn_if_no_selection(&bridge, presenter);
                bridge.set_selection(&text);
            } else {
                bridge.set_text(&text);
            }
            EXIT_SUCCESS
        }
        Commands::HasImage => {
            presenter.output(&bridge.has_image().to_string());
            EXIT_SUCCESS
        }
        Commands::Image { output, size } => {
            run_image(&bridge, output.as_deref(), size, presenter).await
        }
        Commands::Watch { json, interval } => {
            let interval = interval
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.poll_interval_or_default());
            run_watch(&bridge, interval, json, presenter).await
        }
        other => {
            presenter.error(&format!("not a clipboard command: {:?}", other));
            EXIT_USAGE_ERROR
        }
    }
}

/// Whether the command writes content that must outlive the process
fn persists_writes(command: &Commands) -> bool {
    matches!(command, Commands::Set { .. })
}

fn warn_if_no_selection<H: ClipboardHost>(bridge: &ClipboardBridge<H>, presenter: &Presenter) {
    if !bridge.supports_selection() {
        presenter.warn("Selection buffer is not supported here");
    }
}

async fn run_image<H: ClipboardHost>(
    bridge: &Rc<ClipboardBridge<H>>,
    output: Option<&Path>,
    size: Option<ImageSize>,
    presenter: &Presenter,
) -> u8 {
    let png = match size {
        Some(size) => {
            let provider = ClipboardImageProvider::new(Rc::clone(bridge));
            let (image, actual) = provider.request_image("cli", size);
            if !actual.is_valid() {
                if bridge.has_image() {
                    presenter.error(&format!("Scaled image at {} would be too large", size));
                    return EXIT_ERROR;
                }
                Vec::new()
            } else {
                match encode_png(&image) {
                    Ok(png) => png,
                    Err(e) => {
                        presenter.error(&e.to_string());
                        return EXIT_ERROR;
                    }
                }
            }
        }
        None => bridge.image(),
    };

    if png.is_empty() {
        presenter.error("Clipboard holds no image");
        return EXIT_ERROR;
    }

    let written = match output {
        Some(path) => tokio::fs::write(path, &png).await,
        None => presenter.output_bytes(&png),
    };

    match written {
        Ok(()) => {
            if let Some(path) = output {
                presenter.success(&format!("Saved image to {}", path.display()));
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            presenter.error(&format!("Failed to write image: {}", e));
            EXIT_ERROR
        }
    }
}

async fn run_watch<H: ClipboardHost>(
    bridge: &Rc<ClipboardBridge<H>>,
    interval: Duration,
    json: bool,
    presenter: &Presenter,
) -> u8 {
    let out = *presenter;
    let observer = bridge.on_change(move |event| out.event(event, json));

    presenter.info(&format!(
        "Watching clipboard every {} ms (Ctrl+C to stop)",
        interval.as_millis()
    ));

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let code = loop {
        tokio::select! {
            _ = ticker.tick() => {
                let handled = bridge.process_host_events();
                if handled > 0 {
                    tracing::debug!(handled, "dispatched clipboard changes");
                }
            }
            result = &mut shutdown => {
                if let Err(e) = result {
                    presenter.error(&format!("Failed to listen for Ctrl+C: {}", e));
                    break EXIT_ERROR;
                }
                break EXIT_SUCCESS;
            }
        }
    };

    bridge.remove_observer(observer);
    code
}

async fn run_idle(config: &AppConfig, presenter: &Presenter) -> u8 {
    let utils = Utils::new(create_idle_monitor(), config.byte_precision_or_default());
    match utils.idle_time().await {
        Ok(idle) => {
            presenter.output(&idle.as_millis().to_string());
            EXIT_SUCCESS
        }
        Err(e) => {
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clipboard::{ClipboardBuffer, Payload};
    use crate::infrastructure::MemoryClipboardHost;
    use tempfile::TempDir;

    fn bridge_with(payload: Payload) -> Rc<ClipboardBridge<MemoryClipboardHost>> {
        let host = MemoryClipboardHost::new(true);
        host.put(ClipboardBuffer::Primary, payload);
        Rc::new(ClipboardBridge::new(host))
    }

    #[tokio::test]
    async fn set_writes_through_bridge() {
        let bridge = bridge_with(Payload::Empty);
        let code = run_clipboard_command(
            Commands::Set {
                text: "hello".to_string(),
                selection: false,
            },
            Rc::clone(&bridge),
            &AppConfig::defaults(),
            &Presenter::new(),
        )
        .await;

        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(bridge.text(), "hello");
    }

    #[tokio::test]
    async fn image_without_clipboard_image_fails() {
        let bridge = bridge_with(Payload::Text("not an image".to_string()));
        let dir = TempDir::new().unwrap();
        let code = run_clipboard_command(
            Commands::Image {
                output: Some(dir.path().join("out.png")),
                size: None,
            },
            bridge,
            &AppConfig::defaults(),
            &Presenter::new(),
        )
        .await;

        assert_eq!(code, EXIT_ERROR);
        assert!(!dir.path().join("out.png").exists());
    }

    #[tokio::test]
    async fn scaled_image_is_saved() {
        let image = image::RgbaImage::from_pixel(400, 200, image::Rgba([0, 0, 255, 255]));
        let bridge = bridge_with(Payload::Image(image));
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scaled.png");

        let code = run_clipboard_command(
            Commands::Image {
                output: Some(path.clone()),
                size: Some(ImageSize::new(100, 100)),
            },
            bridge,
            &AppConfig::defaults(),
            &Presenter::new(),
        )
        .await;

        assert_eq!(code, EXIT_SUCCESS);
        let saved = image::open(&path).unwrap();
        assert_eq!((saved.width(), saved.height()), (100, 50));
    }

    #[tokio::test]
    async fn oversized_scale_fails_without_writing() {
        let bridge = bridge_with(Payload::Image(image::RgbaImage::new(1, 1)));
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("huge.png");

        let code = run_clipboard_command(
            Commands::Image {
                output: Some(path.clone()),
                size: Some(ImageSize::new(u32::MAX, u32::MAX)),
            },
            bridge,
            &AppConfig::defaults(),
            &Presenter::new(),
        )
        .await;

        assert_eq!(code, EXIT_ERROR);
        assert!(!path.exists());
    }

    #[test]
    fn only_set_persists_writes() {
        assert!(persists_writes(&Commands::Set {
            text: "x".to_string(),
            selection: true,
        }));
        assert!(!persists_writes(&Commands::Get { selection: false }));
        assert!(!persists_writes(&Commands::Watch {
            json: false,
            interval: None,
        }));
    }

    #[tokio::test]
    async fn utility_commands_succeed() {
        let config = AppConfig::defaults();
        let presenter = Presenter::new();
        assert_eq!(
            run_command(Commands::Uuid, &config, &presenter).await,
            EXIT_SUCCESS
        );
        assert_eq!(
            run_command(
                Commands::Bytes {
                    bytes: 1536,
                    precision: None
                },
                &config,
                &presenter
            )
            .await,
            EXIT_SUCCESS
        );
    }
}
