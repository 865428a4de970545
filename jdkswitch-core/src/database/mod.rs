//! 数据库模块 - SQLite 数据持久化
//!
//! 提供 JDK 注册表的核心存储能力，包括：
//! - 建库建表与首次运行检测
//! - JDK 记录的插入与查询

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::jdk::JdkRecord;

/// 注册表主表名
const TABLE_NAME: &str = "jdks";

/// 安全地获取 Mutex 锁
macro_rules! lock_conn {
    ($mutex:expr) => {
        $mutex
            .lock()
            .map_err(|e| AppError::Database(format!("Mutex lock failed: {}", e)))?
    };
}

/// 数据库连接封装
pub struct Database {
    conn: Mutex<Connection>,
    first_run: bool,
}

impl Database {
    /// 按运行配置打开数据库
    ///
    /// 数据库文件位于 `~/.java_version_manager/main.db`
    pub fn open(config: &AppConfig) -> Result<Self, AppError> {
        Self::open_at(&config.db_path)
    }

    /// 在指定路径打开数据库，目录不存在时创建
    pub fn open_at(db_path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = db_path.parent() {
            if !parent.exists() {
                log::info!("数据目录 {} 不存在，正在创建", parent.display());
            }
            std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }

        let conn = Connection::open(db_path).map_err(|e| AppError::Database(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// 创建内存数据库（用于测试）
    pub fn memory() -> Result<Self, AppError> {
        let conn = Connection::open_in_memory().map_err(|e| AppError::Database(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, AppError> {
        // 建表前探测，记录本次打开是否为首次运行
        let first_run = !table_exists(&conn, TABLE_NAME)?;

        let db = Self {
            conn: Mutex::new(conn),
            first_run,
        };
        db.create_tables()?;

        Ok(db)
    }

    /// 本次打开是否为首次运行（jdks 表此前不存在）
    pub fn first_run(&self) -> bool {
        self.first_run
    }

    /// 创建数据表
    fn create_tables(&self) -> Result<(), AppError> {
        let conn = lock_conn!(self.conn);

        conn.execute_batch(
            r#"
            -- JDK 注册表
            CREATE TABLE IF NOT EXISTS jdks (
                version_code VARCHAR(30) PRIMARY KEY,
                path TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    // ===== JDK DAO =====

    /// 插入一条 JDK 记录
    ///
    /// version_code 已存在时返回 DuplicateVersion，不覆盖旧记录
    pub fn insert_jdk(&self, record: &JdkRecord) -> Result<(), AppError> {
        let conn = lock_conn!(self.conn);

        conn.execute(
            "INSERT INTO jdks (version_code, path) VALUES (?, ?)",
            rusqlite::params![record.version_code, record.path],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                AppError::DuplicateVersion(record.version_code.clone())
            }
            other => AppError::Database(other.to_string()),
        })?;

        Ok(())
    }

    /// 按版本标识查询 JDK 记录
    pub fn find_jdk(&self, version_code: &str) -> Result<Option<JdkRecord>, AppError> {
        let conn = lock_conn!(self.conn);

        let result = conn.query_row(
            "SELECT version_code, path FROM jdks WHERE version_code = ?",
            [version_code],
            |row| {
                Ok(JdkRecord {
                    version_code: row.get(0)?,
                    path: row.get(1)?,
                })
            },
        );

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    /// 获取所有 JDK 记录（按版本标识排序）
    pub fn list_jdks(&self) -> Result<Vec<JdkRecord>, AppError> {
        let conn = lock_conn!(self.conn);

        let mut stmt = conn
            .prepare("SELECT version_code, path FROM jdks ORDER BY version_code ASC")
            .map_err(|e| AppError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(JdkRecord {
                    version_code: row.get(0)?,
                    path: row.get(1)?,
                })
            })
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| AppError::Database(e.to_string()))?);
        }

        Ok(records)
    }
}

/// 检查表是否已存在
fn table_exists(conn: &Connection, table: &str) -> Result<bool, AppError> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            [table],
            |row| row.get(0),
        )
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_init() {
        let db = Database::memory().unwrap();
        assert!(db.first_run());
        assert!(db.list_jdks().unwrap().is_empty());
    }

    #[test]
    fn test_register_and_lookup() {
        let db = Database::memory().unwrap();
        db.insert_jdk(&JdkRecord::new("17", "/usr/lib/jvm/java-17"))
            .unwrap();

        let record = db.find_jdk("17").unwrap().unwrap();
        assert_eq!(record.path, "/usr/lib/jvm/java-17");
    }

    #[test]
    fn test_duplicate_register_keeps_first_record() {
        let db = Database::memory().unwrap();
        db.insert_jdk(&JdkRecord::new("17", "/opt/jdk-17")).unwrap();

        let err = db
            .insert_jdk(&JdkRecord::new("17", "/opt/jdk-17-other"))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateVersion(code) if code == "17"));

        // 原记录未被覆盖
        let record = db.find_jdk("17").unwrap().unwrap();
        assert_eq!(record.path, "/opt/jdk-17");
    }

    #[test]
    fn test_lookup_missing_returns_none() {
        let db = Database::memory().unwrap();
        assert!(db.find_jdk("99").unwrap().is_none());
    }

    #[test]
    fn test_first_run_only_once() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("main.db");

        let db = Database::open_at(&db_path).unwrap();
        assert!(db.first_run());
        drop(db);

        let db = Database::open_at(&db_path).unwrap();
        assert!(!db.first_run());
    }

    #[test]
    fn test_list_jdks_sorted() {
        let db = Database::memory().unwrap();
        db.insert_jdk(&JdkRecord::new("21", "/opt/jdk-21")).unwrap();
        db.insert_jdk(&JdkRecord::new("11", "/opt/jdk-11")).unwrap();

        let codes: Vec<String> = db
            .list_jdks()
            .unwrap()
            .into_iter()
            .map(|r| r.version_code)
            .collect();
        assert_eq!(codes, ["11", "21"]);
    }
}
