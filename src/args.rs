use {
    anyhow::Result,
    clap::Arg,
    std::{path::PathBuf, str::FromStr},
};

#[derive(Debug)]
pub(crate) enum ManualFormat {
    Manpages,
    Markdown,
}

#[derive(Debug)]
pub(crate) struct CallArgs {
    pub command: Command,
}

#[derive(Debug)]
pub(crate) enum Command {
    Manual {
        path: PathBuf,
        format: ManualFormat,
    },
    Autocomplete {
        path: PathBuf,
        shell: clap_complete::Shell,
    },
    Init {
        dir: Option<PathBuf>,
        port: Option<String>,
    },
}

pub(crate) struct ClapArgumentLoader {}

impl ClapArgumentLoader {
    pub(crate) fn root_command() -> clap::Command {
        clap::Command::new("stconf")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Writes the Streamlit server configuration for headless deployments.")
            .propagate_version(true)
            .subcommand_required(true)
            .subcommand(
                clap::Command::new("init")
                    .about("Writes config.toml into the Streamlit config directory.")
                    .arg(
                        Arg::new("dir")
                            .short('d')
                            .long("dir")
                            .required(false)
                            .help("Target directory. Defaults to $HOME/.streamlit."),
                    )
                    .arg(
                        Arg::new("port")
                            .short('p')
                            .long("port")
                            .required(false)
                            .help("Listening port. Defaults to the PORT environment variable."),
                    ),
            )
            .subcommand(
                clap::Command::new("man")
                    .about("Renders the manual.")
                    .arg(Arg::new("out").short('o').long("out").required(true))
                    .arg(
                        Arg::new("format")
                            .short('f')
                            .long("format")
                            .value_parser(["manpages", "markdown"])
                            .required(true),
                    ),
            )
            .subcommand(
                clap::Command::new("autocomplete")
                    .about("Renders shell completion scripts.")
                    .arg(Arg::new("out").short('o').long("out").required(true))
                    .arg(
                        Arg::new("shell")
                            .short('s')
                            .long("shell")
                            .value_parser(["bash", "zsh", "fish", "elvish", "powershell"])
                            .required(true),
                    ),
            )
    }

    pub(crate) fn load() -> Result<CallArgs> {
        let command = Self::root_command().get_matches();

        let cmd = if let Some(subc) = command.subcommand_matches("man") {
            Command::Manual {
                path: subc.get_one::<String>("out").unwrap().into(),
                format: match subc.get_one::<String>("format").unwrap().as_str() {
                    | "manpages" => ManualFormat::Manpages,
                    | "markdown" => ManualFormat::Markdown,
                    | _ => return Err(anyhow::anyhow!("argument \"format\": unknown format")),
                },
            }
        } else if let Some(subc) = command.subcommand_matches("autocomplete") {
            Command::Autocomplete {
                path: subc.get_one::<String>("out").unwrap().into(),
                shell: clap_complete::Shell::from_str(subc.get_one::<String>("shell").unwrap().as_str()).unwrap(),
            }
        } else if let Some(subc) = command.subcommand_matches("init") {
            Command::Init {
                dir: subc.get_one::<String>("dir").map(PathBuf::from),
                port: subc.get_one::<String>("port").cloned(),
            }
        } else {
            return Err(anyhow::anyhow!("unknown command"));
        };

        Ok(CallArgs { command: cmd })
    }
}
