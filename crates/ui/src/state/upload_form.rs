//! State for the upload form screen.

use std::path::PathBuf;

use subnoto_application::{ApplicationError, UploadDocumentInput};
use subnoto_domain::Workspace;

/// Raw values of the upload form as the host reports them.
#[derive(Debug, Clone, Default)]
pub struct UploadFormValues {
    /// Files chosen in the picker; only the first is used.
    pub files: Vec<PathBuf>,
    /// Title field, possibly empty.
    pub title: String,
    /// Selected workspace uuid, possibly empty.
    pub workspace: String,
}

impl From<UploadFormValues> for UploadDocumentInput {
    fn from(values: UploadFormValues) -> Self {
        Self {
            file_path: values.files.into_iter().next(),
            title: Some(values.title).filter(|t| !t.is_empty()),
            workspace_uuid: Some(values.workspace).filter(|w| !w.is_empty()),
        }
    }
}

/// View model for the upload form.
///
/// The workspace picker loads on entry; a failure there degrades to an
/// empty picker rather than failing the whole screen, so the user still
/// sees the credentials hint in the dropdown.
#[derive(Debug, Default)]
pub struct UploadFormState {
    workspaces: Vec<Workspace>,
    workspaces_loading: bool,
    submitting: bool,
}

impl UploadFormState {
    /// Creates an empty state; the picker starts loading immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the workspace picker load as started.
    pub fn begin_workspaces_load(&mut self) {
        self.workspaces_loading = true;
    }

    /// Applies the picker load result; errors degrade to an empty picker.
    pub fn finish_workspaces_load(&mut self, result: Result<Vec<Workspace>, ApplicationError>) {
        self.workspaces = result.unwrap_or_default();
        self.workspaces_loading = false;
    }

    /// Workspaces for the picker.
    #[must_use]
    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    /// Placeholder entry when the picker has nothing to offer.
    #[must_use]
    pub fn picker_placeholder(&self) -> Option<&'static str> {
        if self.workspaces.is_empty() && !self.workspaces_loading {
            Some("No workspaces (check API credentials)")
        } else {
            None
        }
    }

    /// Marks a submit as started. Returns `false` if one is already in
    /// flight; the form ignores repeated submits.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Marks the submit as finished, success or not.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Whether the form should render as busy.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.submitting || self.workspaces_loading
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use subnoto_application::ports::ApiError;

    use super::*;

    #[test]
    fn form_values_normalize_to_upload_input() {
        let input = UploadDocumentInput::from(UploadFormValues {
            files: vec![PathBuf::from("/tmp/a.pdf"), PathBuf::from("/tmp/b.pdf")],
            title: String::new(),
            workspace: "ws-1".into(),
        });
        assert_eq!(input.file_path, Some(PathBuf::from("/tmp/a.pdf")));
        assert_eq!(input.title, None);
        assert_eq!(input.workspace_uuid, Some("ws-1".into()));
    }

    #[test]
    fn empty_form_maps_to_all_none() {
        let input = UploadDocumentInput::from(UploadFormValues::default());
        assert_eq!(input.file_path, None);
        assert_eq!(input.title, None);
        assert_eq!(input.workspace_uuid, None);
    }

    #[test]
    fn picker_failure_degrades_to_placeholder() {
        let mut state = UploadFormState::new();
        state.begin_workspaces_load();
        assert_eq!(state.picker_placeholder(), None);

        state.finish_workspaces_load(Err(ApplicationError::Api(
            ApiError::WorkspaceListFailed { source: None },
        )));
        assert!(state.workspaces().is_empty());
        assert_eq!(
            state.picker_placeholder(),
            Some("No workspaces (check API credentials)")
        );
    }

    #[test]
    fn repeated_submit_is_ignored() {
        let mut state = UploadFormState::new();
        assert!(state.begin_submit());
        assert!(!state.begin_submit());
        state.finish_submit();
        assert!(state.begin_submit());
    }
}
