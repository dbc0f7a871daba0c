/// Name of the environment variable the hosting platform uses to hand the
/// listening port to the deployment.
pub(crate) const PORT_ENV: &str = "PORT";

/// The `[server]` section written to `config.toml`.
///
/// Only `port` varies; `headless` and `enable_cors` are pinned by the
/// deployment model (no local browser, no cross-origin relaxation). The port
/// is kept as the raw string handed over by the environment and substituted
/// verbatim, without parsing or bounds checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServerConfig {
    pub headless: bool,
    pub enable_cors: bool,
    pub port: String,
}

impl ServerConfig {
    pub(crate) fn for_port(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            ..Self::default()
        }
    }

    /// Renders the record in Streamlit's config format.
    ///
    /// Textual substitution on purpose: an empty port value must come out as
    /// a bare `port = ` line, which a TOML serializer would refuse to emit.
    pub(crate) fn render(&self) -> String {
        format!(
            "[server]\nheadless = {}\nenableCORS = {}\nport = {}\n",
            self.headless, self.enable_cors, self.port
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            headless: true,
            enable_cors: false,
            port: String::new(),
        }
    }
}
