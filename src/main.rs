//! qbank - 题库平台命令行客户端
//!
//! 组装真实适配器：reqwest 传输、sled 会话存储、watch 导航器、broadcast 通知

mod cli;

use std::sync::Arc;

use clap::Parser;
use tokio::sync::broadcast;

use qbank::application::{ApiClient, ApiClientError, AuthService, LearningPathApi, Notification};
use qbank::config::{load_config_from_path, print_config, AppConfig};
use qbank::domain::{SessionState, HOME_PATH};
use qbank::infrastructure::{BroadcastNotifier, ReqwestTransport, SledSessionStore, WatchNavigator};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.storage.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let store = Arc::new(SledSessionStore::new(&config.storage.sled_config())?);
    let transport = Arc::new(ReqwestTransport::new(config.api.transport_config())?);
    let navigator = Arc::new(WatchNavigator::new(HOME_PATH));
    let notifier = Arc::new(BroadcastNotifier::new());
    let mut notifications = notifier.subscribe();

    let client = ApiClient::new(
        config.api.client_config(),
        transport,
        store.clone(),
        navigator.clone(),
        notifier,
    );

    let result = run(cli.command, client).await;

    // 把通知转给终端
    drain_notifications(&mut notifications);
    store.flush()?;

    if let Err(e) = result {
        tracing::debug!(kind = e.kind(), error = ?e, "Command failed");
        return Err(e.into());
    }
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let log_filter = format!("warn,qbank={}", config.log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(command: Commands, client: ApiClient) -> Result<(), ApiClientError> {
    let auth = AuthService::new(client.clone());

    match command {
        Commands::Login { account, password } => {
            let profile = auth.login(&account, &password).await?;
            println!("logged in as {} (id {})", profile.display_name(), profile.id);
        }
        Commands::Register { account, password } => {
            let envelope = auth.register(&account, &password).await?;
            println!("registered {}: {}", account, envelope.data);
        }
        Commands::Me => {
            let profile = auth.refresh_profile().await?;
            print_json(&profile);
        }
        Commands::Logout => {
            auth.logout()?;
            println!("logged out");
        }
        Commands::Status => match auth.state()? {
            SessionState::Unauthenticated => println!("not logged in"),
            SessionState::Authenticated { credential, profile } => {
                println!("logged in (header {})", credential.header_name);
                if let Some(profile) = profile {
                    print_json(&profile);
                }
            }
        },
        Commands::LearningPaths => {
            let paths = LearningPathApi::new(client).list_typed().await?;
            for path in paths {
                println!(
                    "{:>3}  {}  {}",
                    path.order_num.unwrap_or_default(),
                    path.title_or_default(),
                    path.short_desc.as_deref().unwrap_or("")
                );
            }
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => tracing::warn!(error = %e, "Failed to render output"),
    }
}

fn drain_notifications(rx: &mut broadcast::Receiver<Notification>) {
    while let Ok(notification) = rx.try_recv() {
        eprintln!("[{:?}] {}", notification.level, notification.message);
    }
}
