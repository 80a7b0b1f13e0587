use crate::ports::{Git, RepositoryFilesystem};

/// Application context holding the collaborators for one working repository.
pub struct AppContext<G: Git, F: RepositoryFilesystem> {
    git: G,
    files: F,
}

impl<G: Git, F: RepositoryFilesystem> AppContext<G, F> {
    /// Create a new application context.
    pub fn new(git: G, files: F) -> Self {
        Self { git, files }
    }

    /// Get a reference to the version-control collaborator.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Get a reference to the repository filesystem.
    pub fn files(&self) -> &F {
        &self.files
    }
}
