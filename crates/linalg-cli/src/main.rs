use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use linalg_cli::commands::{run_multiply, run_solve, run_transpose, run_vecmat};
use linalg_cli::config::{load_input_config, InputConfig};
use linalg_cli::lessons::{run_lesson, Lesson};

fn config_arg() -> Arg {
    Arg::new("config")
        .help("Path to a JSON file with the operands. Defaults are used when omitted.")
        .required(false)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LINALG_LOG", "error,linalg=info"))
        .init();

    let matches = Command::new("linalg")
        .version(clap::crate_version!())
        .about("Elementary linear algebra: matrix products, transpose and 2x2 systems")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Run the fixed vector/matrix and linear system demonstrations")
                .arg(
                    Arg::new("lesson")
                        .short('l')
                        .long("lesson")
                        .help("Which demonstration to run")
                        .value_parser(["vectors", "systems", "all"])
                        .default_value("all"),
                ),
        )
        .subcommand(
            Command::new("multiply")
                .about("Multiply the 'left' matrix by the 'right' matrix")
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("transpose")
                .about("Transpose the 'left' matrix")
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("vecmat")
                .about("Multiply the row 'vector' by the 'right' matrix")
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("solve")
                .about("Solve the 2x2 system 'matrix' * x = 'rhs' with Cramer's rule")
                .arg(config_arg()),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (name, outcome) = match matches.subcommand() {
        Some(("demo", sub_m)) => ("demo", handle_demo(sub_m, &mut out)),
        Some((name, sub_m)) => (name, handle_operation(name, sub_m, &mut out)),
        None => unreachable!("Subcommand is required by CLI configuration"),
    };
    out.flush()?;

    if let Err(e) = outcome {
        log::error!("{} failed: {:#}", name, e);
        std::process::exit(1)
    }
    Ok(())
}

fn handle_demo<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<()> {
    let lesson = matches
        .get_one::<String>("lesson")
        .map(|s| Lesson::from_str(s))
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or(Lesson::All);
    log::info!("[Linalg::demo] Running lesson: {:?}", lesson);
    run_lesson(lesson, out)
}

fn handle_operation<W: Write>(name: &str, matches: &ArgMatches, out: &mut W) -> Result<()> {
    let config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[Linalg::{}] Using config: {:?}", name, config_path);
        load_input_config(config_path)?
    } else {
        let config = InputConfig::default();
        let default_json = serde_json::to_string_pretty(&config).unwrap_or_default();
        log::info!(
            "[Linalg::{}] No config provided; using defaults:\n{}",
            name,
            default_json
        );
        config
    };

    match name {
        "multiply" => run_multiply(&config, out),
        "transpose" => run_transpose(&config, out),
        "vecmat" => run_vecmat(&config, out),
        "solve" => run_solve(&config, out),
        _ => unreachable!(),
    }
}
