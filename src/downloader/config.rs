pub mod session {
    use std::time::Duration;
    pub const VERBOSE: bool = false;
    pub const TIMEOUT: Duration = Duration::from_secs(30);
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";
}
pub mod kattis {
    pub const NAME: &str = "kattis";
    pub const SERVICE_URL: &str = "https://open.kattis.com/";
    pub const DEFAULT_DOMAIN: &str = "open.kattis.com";
    pub const HOST_SUFFIX: &str = ".kattis.com";
    pub const SAMPLE_ARCHIVE: &str = "/file/statement/samples.zip";
}
pub mod archive {
    pub const INPUT_EXT: &str = ".in";
    pub const OUTPUT_EXT: &str = ".ans";
}
pub mod output {
    pub const DIRECTORY: &str = "test";
    pub const TEMPLATE: &str = "{{name}}";
}
