//! JDK 注册表服务模块
//!
//! 处理 JDK 记录的注册、查询与切换流程。

use crate::error::AppError;
use crate::jdk::JdkRecord;
use crate::store::AppState;
use crate::switcher::{JavaHomeSwitcher, SwitchOutcome};

/// JDK 注册表业务逻辑服务
pub struct RegistryService;

impl RegistryService {
    /// 注册一个 JDK
    ///
    /// version_code 已存在时返回 DuplicateVersion，不会覆盖已有记录
    pub fn register(state: &AppState, record: JdkRecord) -> Result<(), AppError> {
        state.db.insert_jdk(&record)
    }

    /// 查询指定版本标识的记录
    pub fn lookup(state: &AppState, version_code: &str) -> Result<Option<JdkRecord>, AppError> {
        state.db.find_jdk(version_code)
    }

    /// 列出所有已注册的 JDK
    pub fn list(state: &AppState) -> Result<Vec<JdkRecord>, AppError> {
        state.db.list_jdks()
    }

    /// 切换到指定版本
    ///
    /// 查询记录并交由切换器落地；版本不存在时返回 VersionNotFound，
    /// 此时切换器不会被调用。
    pub fn switch(
        state: &AppState,
        version_code: &str,
        switcher: &dyn JavaHomeSwitcher,
    ) -> Result<SwitchOutcome, AppError> {
        let record = state
            .db
            .find_jdk(version_code)?
            .ok_or_else(|| AppError::VersionNotFound(version_code.to_string()))?;

        switcher.apply(&record.path)
    }
}
