pub mod init;
pub mod interactive;
pub mod run;
pub mod validate;
