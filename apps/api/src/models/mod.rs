pub mod career;
pub mod chat;
pub mod credential;
