use blazium_build_scripts::*;

/// Blazium asset build scripts
#[derive(argh::FromArgs)]
struct Args {
    /// log every written file
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    cmd: Cmd,
}

#[derive(argh::FromArgs)]
#[argh(subcommand)]
pub enum Cmd {
    GenerateIcons(generate_icons::Args),
    ModuleConfig(module_config::Args),
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args: Args = argh::from_env();
    setup_logger(args.verbose)?;
    match args.cmd {
        Cmd::GenerateIcons(args) => generate_icons::main(args),
        Cmd::ModuleConfig(args) => module_config::main(args),
    }
}
