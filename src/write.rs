extern crate termcolor;

use oj_downloader::error::Error;
use std::io::Write;
use termcolor::StandardStream;

pub fn write_result<E: Error>(
    stdout: &mut StandardStream,
    result: Result<(), E>,
    success: &str,
) -> bool {
    match result {
        Ok(_) => {
            write_ok!(stdout, "Success", "{}", success);
            true
        }
        Err(e) => {
            write_error!(stdout, "Error", "{}", e);
            false
        }
    }
}
