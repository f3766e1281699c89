//! Configuration of a collection.

use crate::errors::{ErrorKind, TroveError, TroveResult};

/// Default separator between the segments of a nested field path.
pub const DEFAULT_FIELD_SEPARATOR: &str = ".";

/// Settings fixed at construction time for a [`crate::Collection`].
///
/// # Examples
///
/// ```rust
/// use trove::CollectionConfig;
///
/// let mut config = CollectionConfig::default();
/// config.set_field_separator("/").unwrap();
/// assert_eq!(config.field_separator(), "/");
/// assert!(!config.skip_falsy_values());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionConfig {
    field_separator: String,
    skip_falsy_values: bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionConfig {
    /// Creates a configuration with `"."` as separator that indexes every
    /// present value.
    pub fn new() -> Self {
        CollectionConfig {
            field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
            skip_falsy_values: false,
        }
    }

    /// Returns the separator used to split nested field paths.
    pub fn field_separator(&self) -> &str {
        &self.field_separator
    }

    /// Sets the separator used to split nested field paths.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `separator` is empty.
    pub fn set_field_separator(&mut self, separator: &str) -> TroveResult<()> {
        if separator.is_empty() {
            log::error!("Field separator cannot be empty");
            return Err(TroveError::new(
                "Field separator cannot be empty",
                ErrorKind::InvalidArgument,
            ));
        }
        self.field_separator = separator.to_string();
        Ok(())
    }

    /// When true, `null`, `false`, `0` and `""` are left out of the indexes
    /// as if the field were absent. Such records are still stored and still
    /// found by scans.
    pub fn skip_falsy_values(&self) -> bool {
        self.skip_falsy_values
    }

    pub fn set_skip_falsy_values(&mut self, skip: bool) {
        self.skip_falsy_values = skip;
    }
}
