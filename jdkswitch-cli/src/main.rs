//! JDK-Switch CLI
//!
//! 命令行工具，注册本机 JDK 安装并切换 JAVA_HOME。
//!
//! # 使用示例
//!
//! ```bash
//! # 注册一个 JDK
//! jdk-switch -r 17 /usr/lib/jvm/java-17
//!
//! # 切换 JAVA_HOME 到该版本
//! jdk-switch -v 17
//!
//! # 查看帮助
//! jdk-switch -h
//! ```

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use commands::{execute, HELP_HINT};

fn main() -> Result<()> {
    // 初始化日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    log::debug!(
        "{} {} starting",
        jdkswitch_core::APP_NAME,
        jdkswitch_core::VERSION
    );

    // 解析命令行参数；参数缺失或无法解析时给出通用提示，不直接报错退出
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            log::debug!("参数解析失败: {}", err);
            println!("{}", HELP_HINT);
            return Ok(());
        }
    };

    execute(cli)
}
