//! 命令执行模块
//!
//! 实现各个 CLI 动作的具体逻辑。

pub mod register;
pub mod switch;

use anyhow::Result;
use jdkswitch_core::AppState;

use crate::cli::Cli;

/// 通用帮助提示（参数缺失或无法解析时输出）
pub const HELP_HINT: &str = "You can use -h or --help to see usage document.";

/// 执行 CLI 命令
pub fn execute(cli: Cli) -> Result<()> {
    let state = AppState::init()?;
    log::debug!("platform: {}", state.config.platform);

    // 首次运行时提醒用户数据文件的位置与重要性
    if state.db.first_run() {
        print_first_run_notice(&state);
    }

    if let Some(args) = cli.register {
        // clap 已保证恰好两个值
        return register::run(&state, &args[0], &args[1]);
    }

    if let Some(version_code) = cli.version {
        return switch::run(&state, &version_code);
    }

    println!("{}", HELP_HINT);
    Ok(())
}

/// 打印首次运行欢迎信息
fn print_first_run_notice(state: &AppState) {
    println!(
        r#"Welcome to use {}!
We are giving you some important information about this program.

This application will write a file main.db in [{}], which is an unencrypted
sqlite3 database. This file contains important information about all installed
jdks in your computer, so do not remove this file.
"#,
        jdkswitch_core::APP_NAME,
        state.config.data_dir.display()
    );
}
