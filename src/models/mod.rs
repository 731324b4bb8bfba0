pub mod config;
pub mod member;

pub use config::{ConfigError, GeneratorConfig, RosterConfig, CONFIG_FILE_NAME};
pub use member::{MemberRecord, RosterDocument, NO_DESIGNATOR};
