extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, Arg, Command};
use oj_downloader::{
    config::output::{DIRECTORY, TEMPLATE},
    output::{Format, NameTemplate},
    Dispatcher, Session,
};
use pretty_env_logger::init_timed;
use std::{io::Write, path::PathBuf, process::exit};
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod download;
    pub mod resolve;
}
mod read;
mod write;

use command::{
    download::{download, Options},
    resolve::{problem, service},
};
use read::read_line;

const HELP: &str = "commands: download <url>... | problem <url> | service <url> | exit";

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("directory")
                .short('d')
                .long("directory")
                .takes_value(true)
                .default_value(DIRECTORY)
                .help("Directory to store sample cases in"),
        )
        .arg(
            Arg::new("template")
                .short('t')
                .long("template")
                .takes_value(true)
                .default_value(TEMPLATE)
                .help("File name template, fields: index, name, stem, ext"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .takes_value(true)
                .possible_values(["yaml", "json"])
                .help("Print sample cases instead of saving them"),
        )
        .arg(
            Arg::new("proxy")
                .long("proxy")
                .takes_value(true)
                .help("Proxy for every request"),
        )
        .arg(
            Arg::new("url")
                .multiple_values(true)
                .help("Problem urls, starts a prompt when omitted"),
        )
        .get_matches();

    let template = match NameTemplate::new(app.value_of("template").unwrap_or(TEMPLATE)) {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "{}", e);
            stdout.reset();
            exit(2);
        }
    };
    let options = Options {
        directory: PathBuf::from(app.value_of("directory").unwrap_or(DIRECTORY)),
        template,
        format: app.value_of("format").and_then(|v| v.parse::<Format>().ok()),
    };
    let session = match Session::with_proxy(app.value_of("proxy").map(String::from)) {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "Error building client: {}", e);
            stdout.reset();
            exit(2);
        }
    };
    let dispatcher = Dispatcher::default();

    if let Some(urls) = app.values_of("url") {
        let ok = download(&mut stdout, &dispatcher, &session, &options, urls).await;
        stdout.reset();
        exit(if ok { 0 } else { 1 });
    }
    while let Some(line) = read_line(&mut stdout, b"oj-downloader> ") {
        let mut args = line.split_whitespace();
        match (args.next(), args.clone().next()) {
            (None, _) => continue,
            (Some("exit"), _) => break,
            (Some("download"), Some(_)) => {
                download(&mut stdout, &dispatcher, &session, &options, args).await;
            }
            (Some("problem"), Some(url)) => {
                problem(&mut stdout, &dispatcher, url);
            }
            (Some("service"), Some(url)) => {
                service(&mut stdout, &dispatcher, url);
            }
            (Some("help"), _) => write_info!(&mut stdout, "Help", "{}", HELP),
            (Some(unknown), _) => write_error!(
                &mut stdout,
                "Error",
                r#"oj-downloader: unknown command "{}", {}"#,
                unknown,
                HELP
            ),
        }
        stdout.reset();
    }
    stdout.reset();
}
