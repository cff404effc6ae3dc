extern crate handlebars;
extern crate serde;

use super::error::{render_error, template_error, Error, Result};
use crate::config::archive::{INPUT_EXT, OUTPUT_EXT};
use handlebars::{no_escape, Handlebars};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Input,
    Output,
}
impl Side {
    fn ext(self) -> &'static str {
        match self {
            Side::Input => &INPUT_EXT[1..],
            Side::Output => &OUTPUT_EXT[1..],
        }
    }
}

#[derive(Serialize)]
struct NameParam<'a> {
    index: usize,
    name: &'a str,
    stem: &'a str,
    ext: &'a str,
}

/// File naming for saved samples, e.g. `sample-{{index}}.{{ext}}`.
///
/// Available fields: `index` (1-based), `name` (entry base name), `stem`
/// (base name without extension) and `ext` (`in` or `ans`).
pub struct NameTemplate {
    engine: Handlebars<'static>,
}
impl NameTemplate {
    pub fn new(template: &str) -> Result<Self> {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(true);
        engine.register_escape_fn(no_escape);
        engine
            .register_template_string("name", template)
            .map_err(template_error)?;
        Ok(NameTemplate { engine })
    }
    pub fn render(&self, index: usize, entry: &str, side: Side) -> Result<String> {
        let name = entry.rsplit('/').next().unwrap_or(entry);
        let ext = side.ext();
        let stem = name
            .strip_suffix(ext)
            .and_then(|v| v.strip_suffix('.'))
            .unwrap_or(name);
        let ret = self
            .engine
            .render(
                "name",
                &NameParam {
                    index,
                    name,
                    stem,
                    ext,
                },
            )
            .map_err(render_error)?;
        if ret.is_empty() || ret == "." || ret == ".." || ret.contains(&['/', '\\'][..]) {
            Err(Error::Name(ret))
        } else {
            Ok(ret)
        }
    }
}
