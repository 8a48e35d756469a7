//! Init command implementation

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use markpen_core::MarkpenConfig;
use miette::{IntoDiagnostic, Result};
use tracing::info;

const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/simorgh3196/markpen/main/schemas/v1/config.json";

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(MarkpenConfig::CONFIG_FILES[0]);
    let body = default_config(&MarkpenConfig::default());

    loop {
        match create_new(&config_path) {
            Ok(mut file) => {
                file.write_all(body.as_bytes()).into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && !force => {
                return Err(miette::miette!(
                    "{} already exists. Use --force to overwrite.",
                    config_path.display()
                ));
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                // --force: remove the file, then retry the exclusive create.
                match std::fs::remove_file(&config_path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_diagnostic(),
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}

/// Creates `path`, refusing to follow a symlink planted in its place.
fn create_new(path: &Path) -> io::Result<File> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    options.open(path)
}

/// Commented JSONC for `config`, pointing editors at the schema.
fn default_config(config: &MarkpenConfig) -> String {
    format!(
        r#"{{
  "$schema": "{}",
  // Characters of context around each error in reports
  "contextWidth": {},
  // Error ids listed per marker before it is cut short
  "markerLimit": {},
  // Delay before re-rendering after an edit
  "debounceMs": {}
}}
"#,
        SCHEMA_URL, config.context_width, config.marker_limit, config.debounce_ms
    )
}
