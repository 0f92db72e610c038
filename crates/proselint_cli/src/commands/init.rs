//! Init command implementation

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result, miette};
use proselint_core::{CONFIG_FILE_NAMES, LintConfig};
use tracing::info;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAMES[0]);
    let contents = default_config()?;

    loop {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.custom_flags(libc::O_NOFOLLOW);
        }

        match options.open(&config_path) {
            Ok(mut file) => {
                file.write_all(contents.as_bytes()).into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette!(
                        "Config file already exists. Use --force to overwrite."
                    ));
                }

                match fs::remove_file(&config_path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_diagnostic(),
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}

/// Default config with every registered check listed at its default state.
fn default_config() -> Result<String> {
    let registry = proselint_rules::default_registry();
    let config = LintConfig::default().with_registry_defaults(&registry);

    let mut json = serde_json::to_string_pretty(&config).into_diagnostic()?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let json = default_config().unwrap();
        let config = LintConfig::from_json(&json).unwrap();

        assert_eq!(config.checks.len(), 30);
        assert!(!config.is_enabled("passive_voice.advanced"));
        assert!(config.is_enabled("weasel_words.very"));
    }
}
