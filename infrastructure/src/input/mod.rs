//! Input directory scanning

mod scanner;

pub use scanner::LocalInputScanner;
