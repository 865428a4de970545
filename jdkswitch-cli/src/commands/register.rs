//! 注册命令实现

use anyhow::{bail, Result};
use jdkswitch_core::{AppError, AppState, JdkRecord, RegistryService};

use crate::output::{print_error, print_success};

/// 注册一个 JDK
pub fn run(state: &AppState, version_code: &str, path: &str) -> Result<()> {
    let record = JdkRecord::new(version_code, path);

    match RegistryService::register(state, record) {
        Ok(()) => {
            print_success(&format!("Registered jdk {} -> {}", version_code, path));
            Ok(())
        }
        Err(AppError::DuplicateVersion(code)) => {
            print_error(&format!(
                "Version code '{}' is already registered, the existing record is kept.",
                code
            ));
            bail!("duplicate version code");
        }
        Err(e) => Err(e.into()),
    }
}
