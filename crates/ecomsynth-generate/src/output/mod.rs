pub mod csv;

pub use self::csv::{WrittenFile, write_csv};
