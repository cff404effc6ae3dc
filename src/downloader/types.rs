extern crate serde;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledString {
    pub name: String,
    pub data: String,
}
impl LabeledString {
    pub fn new<N: Into<String>, D: Into<String>>(name: N, data: D) -> Self {
        LabeledString {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// One official sample: the input file and the answer it is paired with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: LabeledString,
    pub output: LabeledString,
}
