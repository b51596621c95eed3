pub mod components;
pub mod export;
pub mod format;
pub mod notice;
