//! Fetch lifecycle shared by the data-driven sections.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

/// State of a section that issues one request and renders its payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Request in flight (also the server-rendered state).
    #[default]
    Loading,
    Loaded(T),
    /// Any failure; the section shows its static fallback.
    Failed,
}

impl<T> LoadState<T> {
    /// Collapse a request result into the terminal state.
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(_) => Self::Failed,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Target for the section's count-up. `None` until the list has loaded,
    /// and on failure, so the counter stays unset.
    pub fn count(&self) -> Option<u64> {
        self.loaded().map(|list| u64::try_from(list.len()).unwrap_or(u64::MAX))
    }
}
