extern crate async_trait;
extern crate oj_downloader;
extern crate tokio;
extern crate zip;

use async_trait::async_trait;
use oj_downloader::{
    judge::{fetch, Error, Fetch, FormatError},
    Dispatcher, LabeledString,
};
use std::{collections::HashMap, io::Cursor, io::Write};
use zip::{write::FileOptions, ZipWriter};

fn archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, FileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Serves canned archives keyed by url, 404 for everything else.
struct Judge(HashMap<String, Vec<u8>>);
#[async_trait]
impl Fetch for Judge {
    async fn get(&self, url: &str) -> fetch::Result<Vec<u8>> {
        match self.0.get(url) {
            Some(v) => Ok(v.clone()),
            None => Err(fetch::Error::Status(
                url.to_owned(),
                reqwest::StatusCode::NOT_FOUND,
            )),
        }
    }
}

fn judge() -> Judge {
    let mut files = HashMap::new();
    files.insert(
        String::from("https://open.kattis.com/problems/hello/file/statement/samples.zip"),
        archive(&[("hello.in", ""), ("hello.ans", "Hello World!\n")]),
    );
    files.insert(
        String::from("https://open.kattis.com/problems/8queens/file/statement/samples.zip"),
        archive(&[
            ("2.in", "*.......\n"),
            ("1.ans", "valid\n"),
            ("2.ans", "invalid\n"),
            ("1.in", "*.......\n"),
        ]),
    );
    files.insert(
        String::from("https://open.kattis.com/problems/broken/file/statement/samples.zip"),
        archive(&[("1.in", "1\n"), ("1.ans", "1\n"), ("3.in", "3\n")]),
    );
    files.insert(
        String::from("https://open.kattis.com/problems/nosamples/file/statement/samples.zip"),
        archive(&[]),
    );
    Judge(files)
}

#[tokio::test]
async fn hello() {
    let problem = Dispatcher::default()
        .resolve_problem("https://open.kattis.com/problems/hello")
        .unwrap();
    let cases = problem.download_sample_cases(&judge()).await.unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].input, LabeledString::new("hello.in", ""));
    assert_eq!(cases[0].output, LabeledString::new("hello.ans", "Hello World!\n"));
}

#[tokio::test]
async fn contest_problem_uses_short_url() {
    let problem = Dispatcher::default()
        .resolve_problem("https://open.kattis.com/contests/asiasg15prelwarmup/problems/8queens")
        .unwrap();
    let cases = problem.download_sample_cases(&judge()).await.unwrap();
    let names: Vec<(&str, &str)> = cases
        .iter()
        .map(|c| (c.input.name.as_str(), c.output.data.as_str()))
        .collect();
    assert_eq!(names, vec![("1.in", "valid\n"), ("2.in", "invalid\n")]);
}

#[tokio::test]
async fn broken_package() {
    let problem = Dispatcher::default()
        .resolve_problem("https://open.kattis.com/problems/broken")
        .unwrap();
    match problem.download_sample_cases(&judge()).await {
        Err(Error::ArchiveFormat(FormatError::MissingOutput { input, .. })) => {
            assert_eq!(input, "3.in")
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[tokio::test]
async fn no_samples() {
    let problem = Dispatcher::default()
        .resolve_problem("https://open.kattis.com/problems/nosamples/")
        .unwrap();
    assert!(problem
        .download_sample_cases(&judge())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn not_found() {
    let problem = Dispatcher::default()
        .resolve_problem("http://open.kattis.com/problems/missing")
        .unwrap();
    match problem.download_sample_cases(&judge()).await {
        Err(Error::Fetch(e)) => assert_eq!(e.class(), fetch::Class::Client),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn unrecognized_is_not_an_error() {
    let dispatcher = Dispatcher::default();
    assert!(dispatcher
        .resolve_problem("https://open.kattis.org/problems/hello")
        .is_none());
    assert!(dispatcher
        .resolve_problem("https://atcoder.jp/contests/abc001/tasks/abc001_1")
        .is_none());
}
