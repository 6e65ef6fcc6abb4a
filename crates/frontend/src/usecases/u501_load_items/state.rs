use leptos::prelude::*;

/// Why a submission never left the browser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    Empty,
    InvalidJson,
}

impl SubmitRejection {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitRejection::Empty => "No input provided",
            SubmitRejection::InvalidJson => "Invalid JSON provided",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BulkLoaderState {
    pub buffer: String,
    /// Result of the last well-formedness check. Shown, never blocks edits.
    pub is_valid: bool,
    /// Creation requests sent but not yet answered
    pub in_flight: usize,
}

impl Default for BulkLoaderState {
    fn default() -> Self {
        Self {
            buffer: String::new(),
            is_valid: true,
            in_flight: 0,
        }
    }
}

/// Strict JSON syntax check. The shape of the document is not inspected.
pub fn is_well_formed(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}

impl BulkLoaderState {
    pub fn edit(&mut self, text: String) {
        self.is_valid = is_well_formed(&text);
        self.buffer = text;
    }

    /// Gate a submission. On success the returned text is the exact body to
    /// send and the request is counted as in flight.
    ///
    /// The empty check runs before the validity check.
    pub fn begin_submit(&mut self) -> Result<String, SubmitRejection> {
        if self.buffer.is_empty() {
            return Err(SubmitRejection::Empty);
        }
        if !self.is_valid {
            return Err(SubmitRejection::InvalidJson);
        }
        self.in_flight += 1;
        Ok(self.buffer.clone())
    }

    /// Apply the creation outcome: success clears the buffer, failure keeps
    /// it for a manual retry. Other requests may still be outstanding.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if succeeded {
            self.buffer.clear();
            self.is_valid = true;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    /// Pretty-printed copy of the buffer, when it is non-empty and well-formed
    pub fn preview(&self) -> Option<String> {
        if self.buffer.is_empty() || !self.is_valid {
            return None;
        }
        serde_json::from_str::<serde_json::Value>(&self.buffer)
            .ok()
            .and_then(|v| serde_json::to_string_pretty(&v).ok())
    }
}

pub fn create_state() -> RwSignal<BulkLoaderState> {
    RwSignal::new(BulkLoaderState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_not_flagged() {
        let state = BulkLoaderState::default();
        assert!(state.is_valid);
        assert!(state.buffer.is_empty());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_edit_tracks_validity() {
        let mut state = BulkLoaderState::default();
        state.edit("[{\"trade\": ".to_string());
        assert!(!state.is_valid);
        state.edit(r#"[{"trade": "Plumbing"}]"#.to_string());
        assert!(state.is_valid);
        state.edit(String::new());
        assert!(!state.is_valid);
    }

    #[test]
    fn test_empty_buffer_is_rejected_first() {
        let mut state = BulkLoaderState::default();
        state.edit(String::new());
        assert_eq!(state.begin_submit(), Err(SubmitRejection::Empty));
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_invalid_buffer_is_rejected() {
        let mut state = BulkLoaderState::default();
        state.edit("{not json".to_string());
        assert_eq!(state.begin_submit(), Err(SubmitRejection::InvalidJson));
        assert_eq!(SubmitRejection::InvalidJson.message(), "Invalid JSON provided");
    }

    #[test]
    fn test_wrong_shape_is_still_sent() {
        let mut state = BulkLoaderState::default();
        state.edit(r#"{"hello": 1}"#.to_string());
        assert_eq!(state.begin_submit(), Ok(r#"{"hello": 1}"#.to_string()));
        assert!(state.is_submitting());
    }

    #[test]
    fn test_finish_submit() {
        let mut state = BulkLoaderState::default();
        state.edit("[]".to_string());
        state.begin_submit().unwrap();
        state.finish_submit(false);
        assert_eq!(state.buffer, "[]");
        assert!(!state.is_submitting());

        state.begin_submit().unwrap();
        state.finish_submit(true);
        assert!(state.buffer.is_empty());
        assert!(state.is_valid);
    }

    #[test]
    fn test_overlapping_submits_stay_pending() {
        let mut state = BulkLoaderState::default();
        state.edit("[]".to_string());
        state.begin_submit().unwrap();
        state.begin_submit().unwrap();
        assert_eq!(state.in_flight, 2);

        state.finish_submit(false);
        assert!(state.is_submitting());

        state.finish_submit(true);
        assert!(!state.is_submitting());
        assert!(state.buffer.is_empty());
    }

    #[test]
    fn test_preview() {
        let mut state = BulkLoaderState::default();
        assert_eq!(state.preview(), None);
        state.edit(r#"{"a":1}"#.to_string());
        assert_eq!(state.preview().as_deref(), Some("{\n  \"a\": 1\n}"));
        state.edit("{".to_string());
        assert_eq!(state.preview(), None);
    }
}
