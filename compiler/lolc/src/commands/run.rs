//! The `run` command: evaluate a file and print its final value.

use lol_eval::EvalConfig;

use super::read_file;
use crate::report::eprint_report;
use crate::{render_host, run_with};

/// Options accepted after `lol run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub path: String,
    pub max_depth: Option<usize>,
}

impl RunOptions {
    /// Parse the arguments that follow `run`.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut path = None;
        let mut max_depth = None;

        for arg in args {
            if let Some(value) = arg.strip_prefix("--max-depth=") {
                let depth = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid --max-depth value '{value}'"))?;
                max_depth = Some(depth);
            } else if arg.starts_with('-') {
                return Err(format!("unknown option '{arg}'"));
            } else if path.is_none() {
                path = Some(arg.clone());
            } else {
                return Err(format!("unexpected argument '{arg}'"));
            }
        }

        let path = path.ok_or_else(|| "missing file path".to_owned())?;
        Ok(RunOptions { path, max_depth })
    }
}

/// Evaluate a file. `VISIBLE` output goes to stdout, followed by the
/// program's final value; errors are reported and exit with status 1.
pub fn run_file(options: &RunOptions) {
    let source = read_file(&options.path);
    let config = EvalConfig::default().with_max_call_depth(options.max_depth);

    match run_with(&source, &config) {
        Ok(value) => println!("{}", render_host(&value)),
        Err(error) => {
            eprint_report(&error, &options.path, &source);
            std::process::exit(1);
        }
    }
}
