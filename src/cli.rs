// src/cli.rs
use std::{env, ffi::OsString, path::PathBuf};

use crate::config::consts::{TEMPLATE_MAX, TEMPLATE_MIN};
use crate::config::options::{RangeCheck, RunOptions, SourceSpec};
use crate::error::ScrapeError;
use crate::file::render_template;
use crate::runner::{self, RunSummary};
use crate::specs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
}

pub fn usage(bin: &str, spec: &SourceSpec) -> String {
    let mut text = format!(
        "Usage: {bin} [OUTPUT]\n\n\
         Fetch {url} and write {id},{name} rows as CSV.\n\
         OUTPUT defaults to {default} (a directory receives that file name).",
        url = spec.url,
        id = spec.columns[0],
        name = spec.columns[1],
        default = spec.out_template,
    );
    if spec.out_template.contains(TEMPLATE_MIN) || spec.out_template.contains(TEMPLATE_MAX) {
        text.push_str(&format!(
            "\n{TEMPLATE_MIN} and {TEMPLATE_MAX} expand to the lowest and highest id written"
        ));
        if let RangeCheck::Expected(range) = spec.range_check {
            text.push_str(&format!(", e.g. {}", render_template(spec.out_template, Some(range))));
        }
        text.push('.');
    }
    text
}

/// One optional positional: the output path. `-h`/`--help` asks for usage.
/// Paths are kept as `OsString`, so non-UTF-8 names pass through untouched.
pub fn parse_args<I>(spec: &SourceSpec, args: I) -> Result<Command, ScrapeError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut opts = RunOptions::for_source(spec);
    for a in args {
        match a.to_str() {
            Some("-h" | "--help") => return Ok(Command::Help),
            Some(flag) if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ScrapeError::Usage(format!("Unknown arg: {flag}")));
            }
            _ => {
                let path = PathBuf::from(&a);
                if opts.out.is_some() {
                    return Err(ScrapeError::Usage(format!("Unexpected extra argument: {}", path.display())));
                }
                opts.out = Some(path);
            }
        }
    }
    Ok(Command::Run(opts))
}

/// Look up the named source, parse the process arguments and run.
/// `Ok(None)` means usage was printed.
pub fn run(source: &str) -> Result<Option<RunSummary>, ScrapeError> {
    let spec = specs::by_name(source)
        .ok_or_else(|| ScrapeError::Usage(format!("Unknown source: {source}")))?;
    let mut args = env::args_os();
    let bin = args
        .next()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!(spec.name));
    match parse_args(spec, args)? {
        Command::Help => {
            eprintln!("{}", usage(&bin, spec));
            Ok(None)
        }
        Command::Run(opts) => runner::run(spec, &opts).map(Some),
    }
}
