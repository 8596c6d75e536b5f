use compact_str::CompactString;
use std::sync::Arc;

/// Outcome of fetching one section of a repository snapshot.
#[derive(Debug, Clone)]
pub enum ProviderResult<T> {
    /// The operation succeeded and data was found.
    Found(T),

    /// The data could not be obtained for a benign reason (missing endpoint, empty repository, ...).
    Unavailable(CompactString),

    /// An error occurred while fetching this section.
    Error(Arc<ohno::AppError>),
}

impl<T> ProviderResult<T> {
    /// Returns `true` if the result is `Found`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns a reference to the contained data if `Found`, otherwise `None`.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Found(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> ProviderResult<Vec<T>> {
    /// The fetched items, or an empty slice when the section is missing.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.as_ref().map(Vec::as_slice).unwrap_or_default()
    }
}

impl<T> Default for ProviderResult<T> {
    fn default() -> Self {
        Self::Unavailable("not collected".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohno::app_err;

    #[test]
    fn test_is_found_for_found_variant() {
        let result: ProviderResult<String> = ProviderResult::Found("data".to_string());
        assert!(result.is_found());
    }

    #[test]
    fn test_is_found_for_unavailable() {
        let result: ProviderResult<String> = ProviderResult::Unavailable("missing".into());
        assert!(!result.is_found());
    }

    #[test]
    fn test_is_found_for_error() {
        let result: ProviderResult<String> = ProviderResult::Error(Arc::new(app_err!("test error")));
        assert!(!result.is_found());
    }

    #[test]
    fn test_as_ref_for_found() {
        let result: ProviderResult<u32> = ProviderResult::Found(42);
        assert_eq!(result.as_ref(), Some(&42));
    }

    #[test]
    fn test_as_ref_for_error() {
        let result: ProviderResult<u32> = ProviderResult::Error(Arc::new(app_err!("error")));
        assert_eq!(result.as_ref(), None);
    }

    #[test]
    fn test_items_for_found_list() {
        let result = ProviderResult::Found(vec![1, 2, 3]);
        assert_eq!(result.items(), &[1, 2, 3]);
    }

    #[test]
    fn test_items_for_missing_list_is_empty() {
        let unavailable: ProviderResult<Vec<u8>> = ProviderResult::Unavailable("gone".into());
        let error: ProviderResult<Vec<u8>> = ProviderResult::Error(Arc::new(app_err!("boom")));
        assert!(unavailable.items().is_empty());
        assert!(error.items().is_empty());
    }

    #[test]
    fn test_default_is_unavailable() {
        let result: ProviderResult<u32> = ProviderResult::default();
        assert!(matches!(result, ProviderResult::Unavailable(_)));
    }

    #[test]
    fn test_debug_found() {
        let result: ProviderResult<i32> = ProviderResult::Found(42);
        let debug_str = format!("{result:?}");
        assert!(debug_str.contains("Found"));
        assert!(debug_str.contains("42"));
    }
}
