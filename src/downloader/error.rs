use std::error::Error as StdError;

/// Marker for the errors the library hands back to its callers.
pub trait Error: StdError + Send {}

impl Error for crate::judge::Error {}
impl Error for crate::judge::fetch::Error {}
impl Error for crate::output::Error {}
