use {
    anyhow::Result,
    std::path::Path,
};

pub(crate) fn build_manpages(outdir: &Path) -> Result<()> {
    let cmd = crate::args::ClapArgumentLoader::root_command();
    clap_mangen::generate_to(cmd, outdir)?;
    Ok(())
}

pub(crate) fn build_markdown(outdir: &Path) -> Result<()> {
    let cmd = crate::args::ClapArgumentLoader::root_command();
    let markdown = clap_markdown::help_markdown_command(&cmd);
    std::fs::write(outdir.join("stconf.md"), markdown)?;
    Ok(())
}

pub(crate) fn build_shell_completion(outdir: &Path, shell: &clap_complete::Shell) -> Result<()> {
    let mut cmd = crate::args::ClapArgumentLoader::root_command();
    clap_complete::generate_to(*shell, &mut cmd, "stconf", outdir)?;
    Ok(())
}
