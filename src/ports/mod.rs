mod git;
mod random_source;
mod repository_filesystem;

pub use git::Git;
pub use random_source::RandomSource;
pub use repository_filesystem::RepositoryFilesystem;
