mod fake_git;
mod mock_repository_fs;
mod scripted_random;

pub use fake_git::FakeGit;
pub use mock_repository_fs::MockRepositoryFs;
pub use scripted_random::ScriptedRandom;
