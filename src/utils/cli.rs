// shared argument handling for the two binaries
//
// release automation checks the exit status, so a missing positional must
// report "Missing <name>" on stderr and exit with code 1 instead of
// clap's usage-error code

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};

/// parse arguments, turning usage errors into the documented contract
pub fn parse_or_exit<C: Parser>() -> C {
    match C::try_parse() {
        Ok(cli) => cli,
        Err(err) => report_and_exit(err),
    }
}

fn report_and_exit(err: clap::Error) -> ! {
    match err.kind() {
        // help and version requests are not usage errors
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::MissingRequiredArgument => {
            for name in missing_argument_names(&err) {
                eprintln!("Missing {}", name);
            }
            std::process::exit(1);
        }
        _ => {
            eprint!("{}", err);
            std::process::exit(1);
        }
    }
}

fn strip_placeholder(arg: &str) -> String {
    arg.trim_start_matches('<')
        .trim_end_matches('>')
        .to_string()
}

/// argument names a MissingRequiredArgument error complains about
fn missing_argument_names(err: &clap::Error) -> Vec<String> {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::Strings(args)) => args.iter().map(|a| strip_placeholder(a)).collect(),
        Some(ContextValue::String(arg)) => vec![strip_placeholder(arg)],
        _ => vec!["argument".to_string()],
    }
}
