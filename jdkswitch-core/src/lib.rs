//! JDK-Switch Core Library
//!
//! 核心业务逻辑库，提供本机 JDK 注册表与 JAVA_HOME 切换功能。
//! 此库不依赖任何终端框架，可在 CLI 或其他前端中复用。
//!
//! # 架构设计
//!
//! ```text
//! jdkswitch-core/
//! ├── lib.rs        - 公共 API 导出
//! ├── config.rs     - 运行时配置（主目录、数据目录、数据库路径）
//! ├── platform.rs   - 操作系统平台检测
//! ├── error.rs      - 统一错误类型
//! ├── jdk.rs        - JDK 记录数据结构
//! ├── database/     - SQLite 数据持久化
//! ├── switcher/     - JAVA_HOME 切换实现（按平台一种策略）
//! └── services/     - 业务逻辑服务层
//! ```
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use jdkswitch_core::{AppState, JdkRecord, RegistryService};
//!
//! fn main() -> Result<(), jdkswitch_core::AppError> {
//!     // 初始化应用状态（打开 ~/.java_version_manager/main.db）
//!     let state = AppState::init()?;
//!
//!     // 注册一个 JDK
//!     RegistryService::register(&state, JdkRecord::new("17", "/usr/lib/jvm/java-17"))?;
//!
//!     // 查询已注册的记录
//!     if let Some(record) = RegistryService::lookup(&state, "17")? {
//!         println!("{}", record.path);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod jdk;
pub mod platform;
pub mod services;
pub mod store;
pub mod switcher;

// 公共类型导出
pub use config::AppConfig;
pub use database::Database;
pub use error::AppError;
pub use jdk::JdkRecord;
pub use platform::Platform;
pub use services::RegistryService;
pub use store::AppState;
pub use switcher::{switcher_for, JavaHomeSwitcher, SwitchOutcome};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 应用名称
pub const APP_NAME: &str = "jdk-switch";
