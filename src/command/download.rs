extern crate futures;
extern crate termcolor;

use crate::write::write_result;
use futures::future::join_all;
use oj_downloader::{
    output::{self, Format, NameTemplate},
    Dispatcher, Problem, Session, TestCase,
};
use std::{io::Write, path::PathBuf};
use termcolor::{StandardStream, WriteColor};

pub struct Options {
    pub directory: PathBuf,
    pub template: NameTemplate,
    pub format: Option<Format>,
}

#[allow(unused_must_use)]
fn store(
    stdout: &mut StandardStream,
    problem: &dyn Problem,
    cases: &[TestCase],
    options: &Options,
    nested: bool,
) -> bool {
    if let Some(format) = options.format {
        let result = output::print(&mut *stdout, cases, format);
        return write_result(
            stdout,
            result,
            &format!("{}: printed {} sample cases", problem, cases.len()),
        );
    }
    let dir = if nested {
        options.directory.join(problem.id())
    } else {
        options.directory.clone()
    };
    match output::save(&dir, cases, &options.template) {
        Ok(files) => {
            for f in files.iter() {
                write_info!(stdout, "Write", "{}", f.display());
            }
            write_ok!(
                stdout,
                "Success",
                "{}: saved {} sample cases to {}",
                problem,
                cases.len(),
                dir.display()
            );
            true
        }
        Err(e) => {
            write_error!(stdout, "Fail", "{}: {}", problem, e);
            false
        }
    }
}

/// Downloads every recognized url concurrently; `false` if anything failed.
#[allow(unused_must_use)]
pub async fn download<'a, I: IntoIterator<Item = &'a str>>(
    stdout: &mut StandardStream,
    dispatcher: &Dispatcher,
    session: &Session,
    options: &Options,
    urls: I,
) -> bool {
    let mut ok = true;
    let mut problems = Vec::new();
    for url in urls {
        match dispatcher.resolve_problem(url) {
            Some(p) => problems.push(p),
            None => {
                write_error!(stdout, "Error", "{} is not a recognized problem url", url);
                ok = false;
            }
        }
    }
    for p in problems.iter() {
        write_info!(stdout, "Info", "Downloading {}", p.url(true));
    }
    stdout.reset();
    let results = join_all(problems.iter().map(|p| p.download_sample_cases(session))).await;
    let nested = problems.len() > 1;
    for (problem, result) in problems.iter().zip(results.into_iter()) {
        match result {
            Ok(cases) if cases.is_empty() => {
                write_warn!(stdout, "Warning", "{} has no sample cases", problem)
            }
            Ok(cases) => ok &= store(stdout, problem.as_ref(), &cases, options, nested),
            Err(e) => {
                write_error!(stdout, "Fail", "{}: {}", problem, e);
                ok = false;
            }
        }
        stdout.reset();
    }
    ok
}
