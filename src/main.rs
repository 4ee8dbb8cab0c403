// src/main.rs

use clap::error::ErrorKind;
use ntimes::exec::ChildStreams;
use ntimes::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = match cli::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            eprint!("{}", err.render());
            return;
        }
        Err(err) => {
            eprint!("ntimes: flag parse error: {err}");
            std::process::exit(1);
        }
    };

    if args.show_version {
        println!("{}", cli::version_line());
        return;
    }

    if let Err(err) = run_main(&args).await {
        eprintln!("ntimes: {err:#}");
        std::process::exit(1);
    }
}

async fn run_main(args: &cli::CliArgs) -> anyhow::Result<()> {
    logging::init_logging(args.log_level)?;
    run(args, ChildStreams::inherit()).await?;
    Ok(())
}
