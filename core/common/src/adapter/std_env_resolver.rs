//! 標準環境変数解決実装（std::env を委譲）

use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok().filter(|s| !s.is_empty())
    }

    fn current_dir(&self) -> Result<PathBuf, Error> {
        env::current_dir()
            .map_err(|e| Error::env(format!("Failed to get current directory: {}", e)))
    }

    fn executable_dir(&self) -> Result<PathBuf, Error> {
        let exe = env::current_exe()
            .map_err(|e| Error::env(format!("Failed to get executable path: {}", e)))?;
        exe.parent()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| Error::env(format!("Executable has no parent: {}", exe.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_missing_is_none() {
        assert_eq!(StdEnvResolver.var("STOP_HOOK_TEST_SURELY_UNSET_VAR"), None);
    }

    #[test]
    fn test_current_and_executable_dir() {
        assert!(StdEnvResolver.current_dir().unwrap().is_absolute());
        assert!(StdEnvResolver.executable_dir().unwrap().is_dir());
    }
}
