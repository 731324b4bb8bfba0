pub mod generate;
pub mod init;
pub mod parse_line;
