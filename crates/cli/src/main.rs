use std::io::{stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use argz_cli::cli_args::Args;
use argz_cli::demo::{flag_list, Demo};
use argz_cli::error::Result;

fn execute(args: &Args) -> Result<ExitCode> {
    let tokens = args.tokens()?;
    debug!("Split command line into {} argument(s): {:?}", tokens.len(), tokens);

    let about = args.about();
    let mut demo = Demo::default();
    let mut stdout = stdout().lock();

    let outcome = demo.parse(&about, &tokens, &mut stdout)?;

    if outcome.help_requested || outcome.version_requested {
        return Ok(ExitCode::SUCCESS);
    }

    if !outcome.is_complete() {
        eprintln!("Required {} not provided\n", flag_list(&outcome.missing));
        demo.write_help(&about, &mut stdout)?;

        if args.strict {
            return Ok(ExitCode::FAILURE);
        }
        info!("Continuing without required options; pass --strict to fail instead.");
    }

    for line in demo.summary_lines() {
        writeln!(stdout, "{line}")?;
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match execute(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
