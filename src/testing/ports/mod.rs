mod test_project_fs;

pub use self::test_files::TestFiles;
pub use self::test_project_fs::MockProjectFs;
