//! Offline material preview.
//!
//! Renders one sample material of each kind through the content pipeline
//! and writes the resulting HTML documents to an output directory, then
//! walks the 3D viewer through its lifecycle with simulated embed signals.
//! Useful for eyeballing renderer output without a backend.

use std::fs;
use std::path::Path;

use classroom_core::api::ObjectStore;
use classroom_core::config::UploadConfig;
use classroom_core::events::{Event, EventArg, EventHandler, EventSystem, EventType};
use classroom_core::material::{FileAttachment, Material, MaterialContent, ModelSettings};
use classroom_core::render::{html, render, LoadState, ModelViewer, PlainTypesetter};

const OUT_DIR: &str = "preview_out";

fn sample_materials() -> Vec<Material> {
    vec![
        Material::local(
            "sample-text",
            "Quadratic formula",
            MaterialContent::Text {
                content: concat!(
                    "The roots of $ax^2 + bx + c = 0$ are\n",
                    "$$\nx = \\frac{-b \\pm \\sqrt{b^2 - 4ac}}{2a}\n$$\n",
                    "and the discriminant is $b^2 - 4ac$.\n",
                    "An unpaired dollar like $5 stays literal."
                )
                .to_string(),
            },
        ),
        Material::local(
            "sample-video",
            "Lecture recording",
            MaterialContent::Video {
                video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            },
        ),
        Material::local(
            "sample-file",
            "Worksheet",
            MaterialContent::File {
                file: Some(FileAttachment {
                    url: "https://files.example/worksheet.pdf".to_string(),
                    name: Some("worksheet.pdf".to_string()),
                }),
            },
        ),
        Material::local(
            "sample-file-empty",
            "Worksheet (upload pending)",
            MaterialContent::File { file: None },
        ),
        Material::local(
            "sample-model",
            "Water molecule",
            MaterialContent::Model3d {
                model: ModelSettings {
                    url: "https://files.example/molecule.glb".to_string(),
                    scale: 1.5,
                    ar_enabled: true,
                },
            },
        ),
    ]
}

fn write_previews(out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(out_dir)?;
    for material in sample_materials() {
        let view = render(&material, &PlainTypesetter);
        let document = html::material_document(&material, &view);
        let path = out_dir.join(format!("{}.html", material.id));
        fs::write(&path, document)?;
        log::info!("wrote {} ({})", path.display(), material.kind());
    }
    Ok(())
}

/// Viewer wrapper that logs the lifecycle state after each signal.
struct LoggingViewer(ModelViewer);

impl EventHandler for LoggingViewer {
    fn on_event(&mut self, event: &Event) -> bool {
        let consumed = self.0.on_event(event);
        log::info!(
            "viewer handled {:?}: state is now {:?}",
            event.event_type,
            self.0.state()
        );
        consumed
    }
}

/// Simulates the embed's load signals, including a stale one from a model
/// that was swapped out while still loading.
fn demonstrate_viewer_lifecycle() {
    let mut viewer = ModelViewer::mount(ModelSettings {
        url: "old.glb".to_string(),
        scale: 1.0,
        ar_enabled: true,
    });
    let stale = viewer.load_token();
    viewer.set_model_url("molecule.glb");
    let current = viewer.load_token();
    assert_eq!(viewer.state(), LoadState::Loading);

    let mut events = EventSystem::new();
    let viewer = Box::new(LoggingViewer(viewer));
    events.register_handler(EventType::ModelLoaded, viewer);

    // The swapped-out model's failure arrives late, then the current load
    // completes. Only the second signal may move the state machine.
    events.send(
        Event::new(EventType::ModelLoaded, 0.0).with_arg("token", EventArg::Token(stale.value())),
    );
    events.send(
        Event::new(EventType::ModelLoaded, 0.1).with_arg("token", EventArg::Token(current.value())),
    );
    events.dispatch();
}

/// Notification handler that logs upload outcomes.
struct UploadLogger;

impl EventHandler for UploadLogger {
    fn on_event(&mut self, event: &Event) -> bool {
        match event.event_type {
            EventType::UploadCompleted => {
                log::info!("upload available at {}", event.get_url().unwrap_or("?"));
            }
            EventType::UploadFailed => {
                log::warn!("upload failed: {}", event.get_detail().unwrap_or("?"));
            }
            _ => {}
        }
        true
    }
}

/// Simulates a rejected upload so the notification path is visible without
/// a storage service: the oversize check fires before anything is sent.
fn demonstrate_upload_notification() -> Result<(), Box<dyn std::error::Error>> {
    let config = UploadConfig {
        endpoint: "http://localhost:9000/uploads/".to_string(),
        max_size_mb: 1,
    };
    let store = ObjectStore::new(&config)?;

    let mut events = EventSystem::new();
    events.register_handler(EventType::UploadCompleted, Box::new(UploadLogger));
    events.register_handler(EventType::UploadFailed, Box::new(UploadLogger));

    let oversize = vec![0_u8; 2 * 1024 * 1024];
    if let Err(err) = store.put_notified(&mut events, "molecule.glb", oversize, "model/gltf-binary")
    {
        log::info!("draft keeps its state after: {err}");
    }
    events.dispatch();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = Path::new(OUT_DIR);
    write_previews(out_dir)?;
    demonstrate_viewer_lifecycle();
    demonstrate_upload_notification()?;

    log::info!("previews written to {OUT_DIR}/");
    Ok(())
}
