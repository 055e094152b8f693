use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::Parser;
use graphicsfuzz_update::{TestDeclaration, TestInputs, DEFAULT_TEST_NAME};

/// Update GraphicsFuzz tests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    /// Reference SPIR-V fragment shader in textual assembly
    reference: PathBuf,
    /// Variant SPIR-V fragment shader in textual assembly
    variant: PathBuf,
    /// Uniforms declaration in JSON file
    uniforms: PathBuf,

    /// Test name the generated functions are named after
    #[arg(short, long, default_value = DEFAULT_TEST_NAME)]
    name: String,
    /// Also print the line registering the case with its test group
    #[arg(short, long)]
    registration: bool,
    /// Case name used by the registration line (defaults to the snake case test name)
    #[arg(long = "case", requires = "registration")]
    case_name: Option<String>,
    /// Test group variable used by the registration line
    #[arg(long, requires = "registration")]
    group: Option<String>,
}

fn init_log() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn run(args: Arguments) -> Result<String, graphicsfuzz_update::Error> {
    let inputs = TestInputs::new(args.reference, args.variant, args.uniforms);

    let mut test = TestDeclaration::new(args.name)?;
    if let Some(case_name) = args.case_name {
        test = test.with_case_name(case_name);
    }
    if let Some(group) = args.group {
        test = test.with_group(group);
    }

    let mut output = inputs.generate(&test)?;
    if args.registration {
        output.push('\n');
        output += &test.registration();
    }
    Ok(output)
}

fn main() -> ExitCode {
    init_log();
    let args = Arguments::parse();

    match run(args) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = writeln!(stdout, "{}", output) {
                log::error!("unable to write output: {}", err);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
