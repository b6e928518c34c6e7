use clap::Parser;
use color_eyre::Result;
use wizard::cli::{Cli, Cmd};

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();
    match cli.cmd.take().unwrap_or_default() {
        Cmd::Run => {
            wizard::run(&cli).await?;
        }
        Cmd::Check { field, value } => match wizard::check(field.into(), &value) {
            None => println!("ok"),
            Some(message) => {
                println!("{message}");
                std::process::exit(libc::EXIT_FAILURE);
            }
        },
    }
    Ok(())
}
