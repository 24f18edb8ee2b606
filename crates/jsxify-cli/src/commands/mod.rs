pub mod build;
pub mod convert;
pub mod dev;
pub mod init;
