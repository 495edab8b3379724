//! Fetch status of the current league selection

use std::fmt;

/// Lifecycle of the team fetch for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Success => "success",
            FetchStatus::Error => "error",
        })
    }
}

/// Status plus the flags that travel with it.
///
/// `error_message` is non-empty only while `status` is [`FetchStatus::Error`],
/// and `served_from_cache` is only ever set alongside [`FetchStatus::Success`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    status: FetchStatus,
    served_from_cache: bool,
    error_message: String,
}

impl FetchState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            status: FetchStatus::Loading,
            ..Self::default()
        }
    }

    pub fn success(served_from_cache: bool) -> Self {
        Self {
            status: FetchStatus::Success,
            served_from_cache,
            error_message: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: FetchStatus::Error,
            served_from_cache: false,
            error_message: message.into(),
        }
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn served_from_cache(&self) -> bool {
        self.served_from_cache
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_keep_flags_consistent() {
        assert_eq!(FetchState::idle().status(), FetchStatus::Idle);
        assert_eq!(FetchState::loading().error_message(), "");
        assert!(!FetchState::loading().served_from_cache());

        let cached = FetchState::success(true);
        assert_eq!(cached.status(), FetchStatus::Success);
        assert!(cached.served_from_cache());

        let failed = FetchState::error("API server error (500)");
        assert_eq!(failed.status(), FetchStatus::Error);
        assert_eq!(failed.error_message(), "API server error (500)");
        assert!(!failed.served_from_cache());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(FetchStatus::Idle.to_string(), "idle");
        assert_eq!(FetchStatus::Loading.to_string(), "loading");
        assert_eq!(FetchStatus::Success.to_string(), "success");
        assert_eq!(FetchStatus::Error.to_string(), "error");
    }
}
