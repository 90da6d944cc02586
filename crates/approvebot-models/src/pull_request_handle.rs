use std::fmt;

use crate::RepositoryPath;

/// A pull request of a known repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestHandle {
    repository_path: RepositoryPath,
    number: u64,
}

impl PullRequestHandle {
    pub fn new(repository_path: RepositoryPath, number: u64) -> Self {
        Self {
            repository_path,
            number,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn owner(&self) -> &str {
        self.repository_path.owner()
    }

    pub fn name(&self) -> &str {
        self.repository_path.name()
    }
}

impl fmt::Display for PullRequestHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repository_path, self.number)
    }
}

impl From<(&str, &str, u64)> for PullRequestHandle {
    fn from((owner, name, number): (&str, &str, u64)) -> Self {
        Self::new((owner, name).into(), number)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        let handle = PullRequestHandle::new("openssl/openssl".parse().unwrap(), 1234);

        assert_eq!(handle, ("openssl", "openssl", 1234).into());
        assert_eq!((handle.owner(), handle.name()), ("openssl", "openssl"));
        assert_eq!(handle.to_string(), "openssl/openssl#1234");
    }
}
