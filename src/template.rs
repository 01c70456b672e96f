//! Templates executing generated SQL against a concrete driver.

pub use persistence_core::template::Template;

#[cfg(feature = "rusqlite")]
mod rusqlite;

#[cfg(feature = "rusqlite")]
pub use self::rusqlite::SqliteTemplate;
