//! CLI Argument Parsing
//!
//! CLIの引数解析。値を省略した引数は設定ファイル、次にデフォルト値で補われる。

use clap::Parser;

/// 1つのファイルを多数のドキュメントとしてContent Serverにアップロードする CLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "csload")]
#[command(about = "Upload one file as many documents to Content Server", long_about = None)]
pub struct Args {
    /// Parent ID of new documents [default: 2000]
    #[arg(long = "parentid")]
    pub parent_id: Option<i64>,

    /// File to upload [default: /etc/hosts, c:\windows\win.ini on Windows]
    #[arg(long)]
    pub file: Option<String>,

    /// Document name prefix [default: doc]
    #[arg(long)]
    pub name: Option<String>,

    /// Documents to upload [default: 5]
    #[arg(long)]
    pub count: Option<usize>,

    /// Content Server URL (required)
    #[arg(long)]
    pub url: Option<String>,

    /// Username [default: Admin]
    #[arg(long)]
    pub username: Option<String>,

    /// Password [default: livelink]
    #[arg(long)]
    pub password: Option<String>,

    /// Number of concurrent uploads [default: 5]
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Config file path (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dry run mode - print planned document names, don't authenticate or upload
    #[arg(long)]
    pub dry_run: bool,
}
