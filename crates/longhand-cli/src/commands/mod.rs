pub mod init;
pub mod play;
pub mod solve;
pub mod validate;
