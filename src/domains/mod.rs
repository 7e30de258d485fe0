pub mod credential;
pub mod mail;
