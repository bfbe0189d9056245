pub mod build;
pub mod export;
pub mod init;
pub mod serve;
pub mod validate;
