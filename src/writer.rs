use {
    crate::config::ServerConfig,
    anyhow::{Context, Result},
    std::path::{Path, PathBuf},
};

pub(crate) const CONFIG_FILE: &str = "config.toml";

/// `$HOME/.streamlit`, the directory Streamlit reads its config from.
pub(crate) fn default_config_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| anyhow::anyhow!("could not determine home directory"))?;
    Ok(home.join(".streamlit"))
}

/// Ensures `dir` exists and writes the rendered config to `dir/config.toml`,
/// truncating any previous contents. Returns the written path.
///
/// Concurrent invocations race on the file; last writer wins, as with any
/// plain overwrite.
pub(crate) fn write_config(dir: &Path, config: &ServerConfig) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    let path = dir.join(CONFIG_FILE);
    std::fs::write(&path, config.render())
        .with_context(|| format!("Failed to write config file to: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("deep").join(".streamlit");
        assert!(!dir.exists());

        let path = write_config(&dir, &ServerConfig::for_port("8080")).unwrap();

        assert!(dir.is_dir());
        assert_eq!(path, dir.join(CONFIG_FILE));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "[server]\nheadless = true\nenableCORS = false\nport = 8080\n"
        );
    }

    #[test]
    fn existing_directory_and_unrelated_files_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();
        std::fs::write(dir.join("credentials.toml"), "[general]\n").unwrap();

        write_config(&dir, &ServerConfig::for_port("3000")).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.join("credentials.toml")).unwrap(),
            "[general]\n"
        );
        assert!(dir.join(CONFIG_FILE).is_file());
    }

    #[test]
    fn overwrites_previous_contents_wholesale() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();
        std::fs::write(dir.join(CONFIG_FILE), "[server]\nport = 1234\nstale = true\n").unwrap();

        let path = write_config(&dir, &ServerConfig::for_port("8501")).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            written,
            "[server]\nheadless = true\nenableCORS = false\nport = 8501\n"
        );
        assert!(!written.contains("stale"));
    }

    #[test]
    fn repeated_runs_are_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();
        let config = ServerConfig::for_port("65535");

        let first = write_config(&dir, &config).unwrap();
        let first_contents = std::fs::read_to_string(&first).unwrap();
        let second = write_config(&dir, &config).unwrap();
        let second_contents = std::fs::read_to_string(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_contents, second_contents);
    }

    #[test]
    fn unset_port_writes_empty_value() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();

        let path = write_config(&dir, &ServerConfig::for_port(String::new())).unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "[server]\nheadless = true\nenableCORS = false\nport = \n"
        );
    }

    #[test]
    fn unwritable_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the directory should go.
        let blocker = tmp.path().join("occupied");
        std::fs::write(&blocker, "").unwrap();

        let err = write_config(&blocker.join(".streamlit"), &ServerConfig::for_port("8080"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to create directory"));
    }
}
