extern crate handlebars;
extern crate serde_json;
extern crate serde_yaml;

use handlebars::{RenderError, TemplateError};
use std::{error::Error as StdError, fmt, io, path::PathBuf, result::Result as StdResult};

#[derive(Debug)]
pub enum Error {
    Template(TemplateError),
    Render(RenderError),
    Name(String),
    Duplicate(String),
    Format(String),
    Io(PathBuf, io::Error),
    Print(io::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Template(err) => write!(f, "Error parsing template: {}", err),
            Error::Render(err) => write!(f, "Error generating file name: {}", err),
            Error::Name(name) => write!(f, r#"Invalid file name "{}""#, name),
            Error::Duplicate(name) => write!(f, r#"File name "{}" used twice"#, name),
            Error::Format(name) => write!(f, r#"Unknown output format "{}""#, name),
            Error::Io(path, err) => write!(f, "Error writing {}: {}", path.display(), err),
            Error::Print(err) => write!(f, "Error printing sample cases: {}", err),
            Error::Yaml(err) => write!(f, "yaml: {}", err),
            Error::Json(err) => write!(f, "json: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Template(err) => Some(err),
            Error::Render(err) => Some(err),
            Error::Io(_, err) => Some(err),
            Error::Print(err) => Some(err),
            Error::Yaml(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Name(_) | Error::Duplicate(_) | Error::Format(_) => None,
        }
    }
}

pub type Result<T> = StdResult<T, Error>;

pub(super) fn template_error(error: TemplateError) -> Error {
    Error::Template(error)
}
pub(super) fn render_error(error: RenderError) -> Error {
    Error::Render(error)
}
