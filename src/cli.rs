//! 命令行参数定义

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// qbank - 题库平台命令行客户端
#[derive(Parser, Debug)]
#[command(
    name = "qbank",
    version,
    about = "Session-aware command-line client for the question-bank platform",
    after_help = "EXAMPLES:\n    \
                  qbank login alice --password secret\n    \
                  qbank me\n    \
                  qbank --config prod.toml learning-paths"
)]
pub struct Cli {
    /// 配置文件路径，不指定时搜索 qbank.toml / qbank.local.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Log in and store the session locally
    Login {
        account: String,
        #[arg(short, long, env = "QBANK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Register a new account
    Register {
        account: String,
        #[arg(short, long, env = "QBANK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Fetch the current user from the backend and refresh the stored profile
    Me,

    /// Clear the stored session
    Logout,

    /// Show the locally stored session without contacting the backend
    Status,

    /// List learning path stages
    LearningPaths,
}
