pub mod args;
pub mod config;
pub mod reference;
pub mod writer;

use {
    crate::config::ServerConfig,
    anyhow::{Context, Result},
    args::ManualFormat,
};

fn main() -> Result<()> {
    let cmd = crate::args::ClapArgumentLoader::load()?;

    match cmd.command {
        | crate::args::Command::Manual { path, format } => {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            match format {
                | ManualFormat::Manpages => {
                    reference::build_manpages(&path)?;
                },
                | ManualFormat::Markdown => {
                    reference::build_markdown(&path)?;
                },
            }
            Ok(())
        },
        | crate::args::Command::Autocomplete { path, shell } => {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            reference::build_shell_completion(&path, &shell)?;
            Ok(())
        },
        | crate::args::Command::Init { dir, port } => {
            // An unset PORT is substituted as an empty value, matching the
            // plain shell interpolation this tool replaces.
            let port = port
                .or_else(|| std::env::var(config::PORT_ENV).ok())
                .unwrap_or_default();
            let dir = match dir {
                | Some(dir) => dir,
                | None => writer::default_config_dir()?,
            };
            let path = writer::write_config(&dir, &ServerConfig::for_port(port))?;
            println!("{}", path.display());
            Ok(())
        },
    }
}
