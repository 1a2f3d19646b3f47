use autocomplete::app::Exit;
use autocomplete::cli::CliArgs;
use clap::Parser;
use color_eyre::eyre;

mod log;

fn main() -> eyre::Result<()> {
    let args = CliArgs::parse();

    if std::env::var("NO_COLOR").is_err() {
        color_eyre::install()?;
    } else {
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()?;
    }

    log::init().ok();
    tracing::debug!("Cli args: {args:?}");

    if autocomplete::app::run(args)? == Exit::Cancelled {
        std::process::exit(1);
    }

    Ok(())
}
