//! Lifecycle record of one asynchronous request
//!
//! `pending` and `complete` are never both set. A fresh record is idle
//! (all flags cleared, no data).

/// Observable state of the most recent request issued by an endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub data: Option<T>,
    pub pending: bool,
    pub complete: bool,
    pub error: bool,
}

impl<T> RequestState<T> {
    /// Nothing has been requested yet
    pub fn idle() -> Self {
        Self {
            data: None,
            pending: false,
            complete: false,
            error: false,
        }
    }

    /// A request is in flight
    pub fn pending() -> Self {
        Self {
            data: None,
            pending: true,
            complete: false,
            error: false,
        }
    }

    pub fn succeeded(data: T) -> Self {
        Self {
            data: Some(data),
            pending: false,
            complete: true,
            error: false,
        }
    }

    /// Settled with a failure; the cause is not kept
    pub fn failed() -> Self {
        Self {
            data: None,
            pending: false,
            complete: true,
            error: true,
        }
    }

    /// Terminal state for a resolved call
    pub fn settle<E>(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(data) => Self::succeeded(data),
            Err(_) => Self::failed(),
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.pending && !self.complete
    }

    pub fn is_settled(&self) -> bool {
        self.complete
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_flags() {
        let state = RequestState::<String>::default();
        assert_eq!(state.data, None);
        assert!(!state.pending && !state.complete && !state.error);
        assert!(state.is_idle());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_pending_is_not_complete() {
        let state = RequestState::<String>::pending();
        assert!(state.pending);
        assert!(!state.complete);
        assert!(!state.error);
        assert_eq!(state.data, None);
        assert!(!state.is_idle());
    }

    #[test]
    fn test_settle_ok_keeps_data() {
        let state = RequestState::settle(Ok::<_, ()>("Hello world".to_string()));
        assert_eq!(state, RequestState::succeeded("Hello world".to_string()));
        assert_eq!(state.data.as_deref(), Some("Hello world"));
        assert!(state.complete && !state.pending && !state.error);
    }

    #[test]
    fn test_settle_err_drops_cause() {
        let state = RequestState::<String>::settle(Err("HTTP 500"));
        assert_eq!(state.data, None);
        assert!(state.complete && state.error && !state.pending);
        assert!(state.is_settled());
    }

    #[test]
    fn test_pending_and_complete_never_both_set() {
        let states = [
            RequestState::<u8>::idle(),
            RequestState::pending(),
            RequestState::succeeded(1),
            RequestState::failed(),
        ];
        for state in states {
            assert!(!(state.pending && state.complete));
        }
    }
}
