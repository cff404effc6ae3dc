extern crate termcolor;

use std::io::{stdin, Write};
use termcolor::{StandardStream, WriteColor};

/// Returns `false` once stdin is exhausted.
#[allow(unused_must_use)]
pub fn read_line_to(stdout: &mut StandardStream, prompt: &[u8], dest: &mut String) -> bool {
    dest.clear();
    loop {
        stdout.write(prompt);
        stdout.flush();
        match stdin().read_line(dest) {
            Ok(0) => return false,
            Ok(_) => {
                dest.truncate(dest.trim_end().len());
                return true;
            }
            Err(e) => write_error!(stdout, "Error", "Read: {}", e.to_string()),
        }
        stdout.reset();
    }
}
pub fn read_line(stdout: &mut StandardStream, prompt: &[u8]) -> Option<String> {
    let mut ret = String::new();
    if read_line_to(stdout, prompt, &mut ret) {
        Some(ret)
    } else {
        None
    }
}
