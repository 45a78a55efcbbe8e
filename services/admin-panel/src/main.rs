use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use admin_panel::{
    AdminPanelClient, HttpTransport, MemoryDocument, UsersEndpoint,
    console::{Command, HELP, StdinConfirm, dispatch, render_snapshot, stdin_lines},
    notify::Notifier,
};
use common::{PanelConfig, telemetry::init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let config = PanelConfig::from_env()?;

    // Initialize logging
    init_tracing(&config.log_filter)?;

    info!("Starting admin panel");

    let document = Arc::new(MemoryDocument::new());
    let lines = stdin_lines();
    let client = AdminPanelClient::new(
        Arc::new(HttpTransport::new()),
        document.clone(),
        Arc::new(StdinConfirm::new(lines.clone())),
        UsersEndpoint::new(config.api_url.clone()),
        Notifier::new(document.clone(), config.notice_duration()),
    );

    client.mount().await;
    println!("{}", render_snapshot(&document.snapshot()));
    println!("{HELP}");

    loop {
        let line = lines.lock().await.next_line().await?;
        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        let show_help = command == Command::Help;
        if !dispatch(&client, document.as_ref(), command).await {
            break;
        }

        if show_help {
            println!("{HELP}");
        } else {
            println!("{}", render_snapshot(&document.snapshot()));
        }
    }

    info!("Admin panel stopped");
    Ok(())
}
