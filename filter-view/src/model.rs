//! Records handed to the view layer by the data-loading collaborator.

use serde::Deserialize;
use serde::Serialize;

/// A GitHub repository uploads are grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub owner: String,
    pub name: String,
}

impl Repo {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// `owner/name`, as shown to users.
    pub fn description(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// The branch-identifying refs GitHub Actions reports for an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRefs {
    /// Set for pull-request runs; names the PR's head branch.
    pub github_head_ref: Option<String>,
    pub github_ref_name: Option<String>,
}

/// Branch an upload belongs to, preferring the PR head ref.
pub fn branch_name_for_upload(upload: &UploadRefs) -> &str {
    upload
        .github_head_ref
        .as_deref()
        .or(upload.github_ref_name.as_deref())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
}

/// A single test failure recorded against an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub id: String,
    pub upload_id: String,
    pub test_case: TestCase,
    pub message: String,
}
