pub mod content;
pub mod gallery;
pub mod reveal;
pub mod storage;
