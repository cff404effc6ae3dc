extern crate termcolor;

use oj_downloader::Dispatcher;
use std::io::Write;
use termcolor::StandardStream;

pub fn service(stdout: &mut StandardStream, dispatcher: &Dispatcher, url: &str) -> bool {
    match dispatcher.resolve_service(url) {
        Some(s) => {
            write_ok!(stdout, "Service", "{} {}", s.name(), s.url());
            true
        }
        None => {
            write_error!(stdout, "Error", "{} is not a recognized service url", url);
            false
        }
    }
}

pub fn problem(stdout: &mut StandardStream, dispatcher: &Dispatcher, url: &str) -> bool {
    match dispatcher.resolve_problem(url) {
        Some(p) => {
            write_ok!(stdout, "Problem", "{}", p);
            write_info!(stdout, "Url", "{}", p.url(true));
            write_info!(stdout, "Service", "{}", p.service().name());
            true
        }
        None => {
            write_error!(stdout, "Error", "{} is not a recognized problem url", url);
            false
        }
    }
}
