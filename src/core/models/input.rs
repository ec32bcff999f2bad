//! Rule input
//!
//! Everything one rule evaluation reads about the pull request.

use super::ChangedFile;

/// A changed file in the context of its pull request
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    /// The file under evaluation
    pub file: &'a ChangedFile,
    /// PR author login
    pub author: &'a str,
    /// PR title
    pub title: &'a str,
}

impl<'a> RuleInput<'a> {
    /// Bundle a file with its PR author and title
    #[must_use]
    pub const fn new(file: &'a ChangedFile, author: &'a str, title: &'a str) -> Self {
        Self {
            file,
            author,
            title,
        }
    }

    /// `sha/filename/author` key used in log lines
    #[must_use]
    pub fn log_key(&self) -> String {
        self.file.log_key(self.author)
    }
}
