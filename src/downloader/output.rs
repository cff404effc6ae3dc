extern crate log;
extern crate serde_json;
extern crate serde_yaml;

mod error;
pub mod name;

pub use error::{Error, Result};
pub use name::{NameTemplate, Side};

use crate::types::TestCase;
use log::debug;
use std::{
    collections::HashSet,
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}
impl FromStr for Format {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            unknown => Err(Error::Format(unknown.to_owned())),
        }
    }
}

/// Prints the cases as one document; the output always ends with a newline.
pub fn print<W: Write>(mut wr: W, cases: &[TestCase], format: Format) -> Result<()> {
    match format {
        Format::Yaml => serde_yaml::to_writer(&mut wr, cases).map_err(Error::Yaml)?,
        Format::Json => serde_json::to_writer_pretty(&mut wr, cases).map_err(Error::Json)?,
    }
    wr.write_all(b"\n").map_err(Error::Print)
}

/// Writes every case into `dir`, returning the files in the order written.
///
/// All names are rendered before anything touches the disk.
pub fn save(dir: &Path, cases: &[TestCase], template: &NameTemplate) -> Result<Vec<PathBuf>> {
    let mut files = Vec::with_capacity(cases.len() * 2);
    let mut used = HashSet::new();
    for (index, case) in cases.iter().enumerate() {
        let sides = [(Side::Input, &case.input), (Side::Output, &case.output)];
        for &(side, content) in sides.iter() {
            let name = template.render(index + 1, &content.name, side)?;
            if !used.insert(name.clone()) {
                return Err(Error::Duplicate(name));
            }
            files.push((dir.join(name), content.data.as_str()));
        }
    }
    fs::create_dir_all(dir).map_err(|e| Error::Io(dir.to_owned(), e))?;
    let mut ret = Vec::with_capacity(files.len());
    for (path, data) in files {
        debug!("writing {}", path.display());
        fs::write(&path, data).map_err(|e| Error::Io(path.clone(), e))?;
        ret.push(path);
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LabeledString;
    use tempfile::tempdir;

    fn cases() -> Vec<TestCase> {
        vec![
            TestCase {
                input: LabeledString::new("sample/1.in", "1 2\n"),
                output: LabeledString::new("sample/1.ans", "3\n"),
            },
            TestCase {
                input: LabeledString::new("sample/2.in", "2 2\n"),
                output: LabeledString::new("sample/2.ans", "4\n"),
            },
        ]
    }

    #[test]
    fn save_files() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let written = save(
            &dir.join("test"),
            &cases(),
            &NameTemplate::new("sample-{{index}}.{{ext}}").unwrap(),
        )
        .unwrap();
        assert_eq!(
            written,
            vec![
                dir.join("test/sample-1.in"),
                dir.join("test/sample-1.ans"),
                dir.join("test/sample-2.in"),
                dir.join("test/sample-2.ans"),
            ]
        );
        assert_eq!(fs::read_to_string(&written[3]).unwrap(), "4\n");
    }

    #[test]
    fn duplicate_names_write_nothing() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("test");
        let result = save(&dir, &cases(), &NameTemplate::new("case.{{ext}}").unwrap());
        assert!(matches!(result, Err(Error::Duplicate(ref n)) if n == "case.in"));
        assert!(!dir.exists());
    }

    #[test]
    fn print_formats() {
        let mut json = Vec::new();
        print(&mut json, &cases(), Format::Json).unwrap();
        assert!(json.ends_with(b"]\n"));
        let back: Vec<TestCase> = serde_json::from_slice(&json).unwrap();
        assert_eq!(back, cases());

        let mut yaml = Vec::new();
        print(&mut yaml, &cases()[..1], Format::Yaml).unwrap();
        let text = String::from_utf8(yaml).unwrap();
        assert!(text.contains("name: sample/1.in"));
        assert!(text.ends_with('\n'));
        assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
        assert!("toml".parse::<Format>().is_err());
    }
}
