mod engine;
mod error;
mod offset;
mod parser;
mod srt;

use crate::engine::Engine;
use crate::error::ShiftError;
use crate::offset::Offset;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::debug;

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own usage text; every argument failure exits 1.
            let _ = err.print();
            process::exit(1);
        }
    };

    match run(cli) {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            process::exit(exit_code(&err));
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Shift all timestamps in an SRT subtitle file by a fixed offset")]
struct Cli {
    #[arg(short, long, value_name = "FILE", help = "The SRT file to read from.")]
    file: PathBuf,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to write to. If not supplied, the input is parsed and validated but no output is written."
    )]
    output: Option<PathBuf>,
    #[arg(
        short = 't',
        long,
        value_name = "OFFSET",
        help = "Amount of time to shift. m=minutes, s=seconds, ss=fraction of a second, e.g. '2m', '-3s', '234ss'."
    )]
    offset: String,
}

fn run(cli: Cli) -> Result<()> {
    let offset = Offset::parse(&cli.offset)?;
    debug!("offset resolved to {}ns", offset.nanos());

    if !cli.file.exists() {
        return Err(ShiftError::InputMissing(cli.file).into());
    }

    Engine::new(offset)
        .transform_file(&cli.file, cli.output.as_deref())
        .context(format!("Failed to shift '{}'", cli.file.display()))
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ShiftError>())
        .map_or(1, ShiftError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_follows_the_root_cause() {
        let err = anyhow::Error::from(ShiftError::TimeRange("bad".into())).context("while shifting");

        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn exit_code_defaults_to_argument_failure() {
        assert_eq!(exit_code(&anyhow::anyhow!("unexpected")), 1);
    }
}
