use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".paradise-nursery.toml";

/// Places searched for the config file, in priority order: CWD, then HOME
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = std::env::var_os("HOME") {
        candidates.push(Path::new(&home).join(CONFIG_FILE));
    }
    candidates
}

/// Content of the first readable config file, if any
pub fn load_config_file() -> Option<String> {
    read_first(&config_file_candidates())
}

fn read_first(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| {
        let content = std::fs::read_to_string(path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cwd_comes_first() {
        let candidates = config_file_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
        assert!(candidates.iter().all(|path| path.ends_with(CONFIG_FILE)));
    }

    #[test]
    fn test_read_first_skips_missing_files() {
        let present = std::env::temp_dir().join(format!("nursery-config-{}.toml", std::process::id()));
        std::fs::write(&present, "log_level = \"info\"").unwrap();

        let content = read_first(&[PathBuf::from("/no/such/config.toml"), present.clone()]);
        std::fs::remove_file(&present).unwrap();

        assert_eq!(content.as_deref(), Some("log_level = \"info\""));
        assert_eq!(read_first(&[PathBuf::from("/no/such/config.toml")]), None);
    }
}
