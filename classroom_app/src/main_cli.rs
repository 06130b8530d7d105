//! Classroom CLI.
//!
//! Signs into the backend, lists the classrooms visible to the account,
//! and renders each classroom's published materials to HTML files.
//! Credentials come from the environment so they never land in shell
//! history:
//!
//! ```text
//! CLASSROOM_EMAIL=ada@school.test CLASSROOM_PASSWORD=secret \
//!     classroom_cli [config.toml]
//! ```
//!
//! Backend failures are transient: they are logged and the run moves on to
//! the next classroom rather than aborting.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use classroom_core::api::Client;
use classroom_core::config::{ClientConfig, Config};
use classroom_core::render::{html, render, PlainTypesetter};
use classroom_core::session::{MemorySession, SessionProvider};

const OUT_DIR: &str = "classroom_out";

fn load_config() -> ClientConfig {
    match env::args().nth(1) {
        Some(path) => match ClientConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("could not load {path}: {err}; using defaults");
                ClientConfig::default()
            }
        },
        None => ClientConfig::default(),
    }
}

fn render_classroom(
    client: &Client,
    classroom_id: &str,
    classroom_name: &str,
    out_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let materials = client.materials(classroom_id)?;
    log::info!("{classroom_name}: {} material(s)", materials.len());

    let dir = out_dir.join(classroom_id);
    fs::create_dir_all(&dir)?;
    for material in materials.iter().filter(|m| m.is_published) {
        let view = render(material, &PlainTypesetter);
        let document = html::material_document(material, &view);
        let path = dir.join(format!("{}.html", material.id));
        fs::write(&path, document)?;
        log::info!("  wrote {} ({})", path.display(), material.kind());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let email = env::var("CLASSROOM_EMAIL")?;
    let password = env::var("CLASSROOM_PASSWORD")?;

    let config = load_config();
    let session = Arc::new(MemorySession::new());
    let client = Client::new(&config, Arc::clone(&session) as Arc<dyn SessionProvider>)?;

    let auth = client.login(&email, &password)?;
    log::info!("signed in as {} ({:?})", auth.user.name, auth.user.role);
    session.begin(auth.token, auth.user);

    let classrooms = client.classrooms()?;
    log::info!("{} classroom(s) visible", classrooms.len());

    let out_dir = Path::new(OUT_DIR);
    for classroom in &classrooms {
        log::info!(
            "classroom {} (code {}, subject {})",
            classroom.name,
            classroom.code,
            classroom.subject
        );
        // One classroom failing should not abort the rest of the run.
        if let Err(err) = render_classroom(&client, &classroom.id, &classroom.name, out_dir) {
            log::error!("skipping {}: {err}", classroom.name);
        }
    }

    Ok(())
}
