//! CLI 参数定义模块
//!
//! 使用 clap 定义命令行接口结构。接口是固定的三个动作：
//! 注册（-r）、切换（-v）、帮助（-h）。

use clap::Parser;

/// jdk-switch - JAVA_HOME 切换工具
#[derive(Parser, Debug)]
#[command(
    name = "jdk-switch",
    disable_version_flag = true,
    about = "☕ JDK 版本管理工具 - 注册本机 JDK 并切换 JAVA_HOME",
    long_about = r#"
This is a helpful tool to set JAVA_HOME in your system.

注册本机已安装的 JDK，并将 JAVA_HOME 切换到指定版本。
数据保存在 ~/.java_version_manager/main.db。

🚀 快速开始:
   jdk-switch -r 17 /usr/lib/jvm/java-17    注册一个 JDK
   jdk-switch -v 17                         切换 JAVA_HOME 到该版本
"#,
    after_help = "💡 提示: 切换不会影响当前 shell，请按输出提示重新加载配置"
)]
pub struct Cli {
    /// 注册一个 JDK
    #[arg(
        short = 'r',
        long = "register",
        num_args = 2,
        value_names = ["VERSION_CODE", "JDK_PATH"],
        help = "注册一个 JDK（版本标识不超过 30 个字符）"
    )]
    pub register: Option<Vec<String>>,

    /// 将 JAVA_HOME 切换到指定版本
    #[arg(
        short = 'v',
        long = "version",
        value_name = "VERSION_CODE",
        conflicts_with = "register",
        help = "将 JAVA_HOME 切换到指定版本"
    )]
    pub version: Option<String>,
}
