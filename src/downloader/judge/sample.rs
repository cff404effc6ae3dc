extern crate log;
extern crate zip;

use super::error::{missing_output, zip_error, Error, Result};
use crate::{
    config::archive::{INPUT_EXT, OUTPUT_EXT},
    types::{LabeledString, TestCase},
};
use log::debug;
use std::io::{Cursor, Read, Seek};
use zip::{result::ZipError, ZipArchive};

fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Vec<u8>> {
    let mut file = archive.by_name(name).map_err(zip_error)?;
    // the size is whatever the central directory claims
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .map_err(|e| zip_error(ZipError::Io(e)))?;
    Ok(buf)
}
fn read_text<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    String::from_utf8(read_entry(archive, name)?).map_err(|source| Error::Decode {
        entry: name.to_owned(),
        source,
    })
}

/// Pairs every `*.in` entry of a sample archive with its `*.ans` sibling.
///
/// Cases come back in byte order of the input entry names.
pub fn decode(content: &[u8]) -> Result<Vec<TestCase>> {
    let mut archive = ZipArchive::new(Cursor::new(content)).map_err(zip_error)?;
    let mut names: Vec<String> = archive.file_names().map(str::to_owned).collect();
    names.sort();
    let mut samples = Vec::new();
    for input in names.iter() {
        debug!("filename: {}", input);
        let stem = match input.strip_suffix(INPUT_EXT) {
            Some(v) => v,
            None => continue,
        };
        let output = format!("{}{}", stem, OUTPUT_EXT);
        if names.binary_search(&output).is_err() {
            return Err(missing_output(input, output));
        }
        let indata = read_text(&mut archive, input)?;
        let outdata = read_text(&mut archive, &output)?;
        samples.push(TestCase {
            input: LabeledString::new(input.as_str(), indata),
            output: LabeledString::new(output, outdata),
        });
    }
    Ok(samples)
}
