//! Per-request loading state

/// State of one asynchronous fetch
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Build from a result, keeping the error's display text
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: LoadState<u8> = LoadState::from_result(Ok::<_, String>(3));
        assert_eq!(ok.ready(), Some(&3));

        let failed: LoadState<u8> = LoadState::from_result(Err("offline"));
        assert_eq!(failed.error(), Some("offline"));
        assert!(LoadState::<u8>::default().is_loading());
    }
}
