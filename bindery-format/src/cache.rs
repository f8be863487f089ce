use crate::{FormatResult, NumberPattern};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Process-wide read-through cache of compiled patterns, keyed by pattern
/// text.
///
/// Patterns are static configuration, so entries are inserted once and
/// never invalidated. Compilation is pure, so two threads racing on the
/// same pattern harmlessly compile it twice; the first insert wins and
/// both see the same descriptor. Construct one cache at startup and share
/// it by `clone` — clones share storage.
#[derive(Debug, Clone, Default)]
pub struct PatternCache {
    inner: Arc<RwLock<HashMap<String, Arc<NumberPattern>>>>,
}

impl PatternCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled descriptor for `pattern`, compiling on first
    /// use.
    ///
    /// # Errors
    ///
    /// Propagates [`FormatError::InvalidPattern`](crate::FormatError) from
    /// compilation; failures are not cached.
    pub fn get_or_compile(&self, pattern: &str) -> FormatResult<Arc<NumberPattern>> {
        {
            let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = map.get(pattern) {
                return Ok(Arc::clone(hit));
            }
        }

        // Compiled outside the lock; racing duplicates are harmless and the
        // first insert wins.
        let compiled = Arc::new(NumberPattern::compile(pattern)?);
        debug!(pattern = %pattern, "compiled number pattern");

        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(
            map.entry(pattern.to_string()).or_insert(compiled),
        ))
    }

    /// Number of cached patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing has been compiled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
