//! Shell 启动文件切换器
//!
//! 类 Unix 平台通过向登录 shell 的启动文件追加 export 语句来持久化
//! JAVA_HOME。写入是纯追加的，不改写文件中已有内容。

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::AppError;
use crate::switcher::{export_command, JavaHomeSwitcher, SwitchOutcome};

/// 向 shell 启动文件追加 export 语句的切换器
pub struct ShellProfileSwitcher {
    profile: PathBuf,
}

impl ShellProfileSwitcher {
    pub fn new(profile: PathBuf) -> Self {
        Self { profile }
    }
}

impl JavaHomeSwitcher for ShellProfileSwitcher {
    fn apply(&self, path: &str) -> Result<SwitchOutcome, AppError> {
        let line = export_command(path);

        log::debug!("向 {} 追加: {}", self.profile.display(), line);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.profile)
            .map_err(|e| AppError::io(&self.profile, e))?;

        writeln!(file, "{}", line).map_err(|e| AppError::io(&self.profile, e))?;

        Ok(SwitchOutcome::ProfileUpdated {
            profile: self.profile.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_append_preserves_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join(".bashrc");
        fs::write(&profile, "alias ll='ls -l'\n").unwrap();

        let switcher = ShellProfileSwitcher::new(profile.clone());
        switcher.apply("/usr/lib/jvm/java-17").unwrap();

        let content = fs::read_to_string(&profile).unwrap();
        assert!(content.starts_with("alias ll='ls -l'\n"));
        assert!(content.contains("export JAVA_HOME=/usr/lib/jvm/java-17\n"));
    }

    #[test]
    fn test_creates_profile_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join(".bashrc");

        let switcher = ShellProfileSwitcher::new(profile.clone());
        let outcome = switcher.apply("/opt/jdk-21").unwrap();

        assert_eq!(outcome, SwitchOutcome::ProfileUpdated { profile: profile.clone() });
        assert_eq!(
            fs::read_to_string(&profile).unwrap(),
            "export JAVA_HOME=/opt/jdk-21\n"
        );
    }

    #[test]
    fn test_second_switch_appends_again() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join(".bashrc");

        let switcher = ShellProfileSwitcher::new(profile.clone());
        switcher.apply("/opt/jdk-11").unwrap();
        switcher.apply("/opt/jdk-17").unwrap();

        // 追加式写入，后一条 export 在 shell 加载时生效
        let content = fs::read_to_string(&profile).unwrap();
        assert_eq!(
            content,
            "export JAVA_HOME=/opt/jdk-11\nexport JAVA_HOME=/opt/jdk-17\n"
        );
    }
}
