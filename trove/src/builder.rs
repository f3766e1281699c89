use crate::collection::Collection;
use crate::config::CollectionConfig;
use crate::errors::{TroveError, TroveResult};
use crate::field_path::FieldPath;
use itertools::Itertools;

/// Builder for creating and configuring a [`Collection`].
///
/// `CollectionBuilder` collects the declared field paths and the
/// configuration. Errors raised while configuring are captured and returned
/// by [`CollectionBuilder::build`], so calls can be chained.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use trove::Collection;
///
/// # fn main() -> trove::TroveResult<()> {
/// let collection = Collection::builder()
///     .field_separator("/")
///     .index("user/name")
///     .build()?;
///
/// collection.add(json!({"user": {"name": "ada"}}))?;
/// assert_eq!(collection.find(&json!({"user/name": "ada"}))?.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct CollectionBuilder {
    error: Option<TroveError>,
    config: CollectionConfig,
    fields: Vec<String>,
}

impl CollectionBuilder {
    /// Creates a builder with the default configuration and no indexes.
    pub fn new() -> Self {
        CollectionBuilder {
            error: None,
            config: CollectionConfig::new(),
            fields: Vec::new(),
        }
    }

    /// Declares an index on `field`.
    ///
    /// Paths are parsed by [`CollectionBuilder::build`] with the separator
    /// configured at that point.
    pub fn index(mut self, field: &str) -> Self {
        self.fields.push(field.to_string());
        self
    }

    /// Declares an index for every `(path, true)` pair; `false` pairs are
    /// ignored.
    pub fn indexes<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        for (field, indexed) in specs {
            if indexed {
                self.fields.push(field.as_ref().to_string());
            }
        }
        self
    }

    /// Sets the separator between nested path segments.
    ///
    /// An empty separator is captured and returned by `build()`.
    pub fn field_separator(mut self, field_separator: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_field_separator(field_separator) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Skips `null`, `false`, `0` and `""` values when indexing.
    pub fn skip_falsy_values(mut self, skip: bool) -> Self {
        self.config.set_skip_falsy_values(skip);
        self
    }

    /// Creates the collection.
    ///
    /// # Errors
    ///
    /// Returns the first error captured while configuring, or
    /// `InvalidArgument` if a declared path cannot be parsed.
    pub fn build(self) -> TroveResult<Collection> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let separator = self.config.field_separator();
        let paths = self
            .fields
            .iter()
            .unique()
            .map(|field| FieldPath::parse(field, separator))
            .collect::<TroveResult<Vec<_>>>()?;

        Ok(Collection::new(self.config, paths))
    }
}
