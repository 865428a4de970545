//! JDK 记录数据结构模块

/// 已注册的 JDK 记录
///
/// 注册表中的唯一实体：用户自定义的短版本标识映射到 JDK 安装根目录。
/// 版本标识在 schema 中声明为 VARCHAR(30) 主键，路径只作为字符串保存，
/// 不校验其在文件系统上是否存在。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdkRecord {
    /// 版本标识（主键）
    pub version_code: String,
    /// JDK 安装根目录路径
    pub path: String,
}

impl JdkRecord {
    /// 创建一条记录
    pub fn new(version_code: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            version_code: version_code.into(),
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = JdkRecord::new("17", "/usr/lib/jvm/java-17");
        assert_eq!(record.version_code, "17");
        assert_eq!(record.path, "/usr/lib/jvm/java-17");
    }
}
