pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "corpus-view";
pub const APP_NAME: &str = "corpus-view";

pub const BROWSER_CONFIG_FILE_NAME: &str = "browser.toml";

pub const ENV_CONFIG_DIRECTORY: &str = "CONFIG_DIRECTORY";
pub const ENV_DATA_DIRECTORY: &str = "DATA_DIRECTORY";
