use aws_config::BehaviorVersion;
use aws_sdk_costexplorer::Client;
use tokio::sync::OnceCell;
use tracing::debug;

static CE_CLIENT: OnceCell<Client> = OnceCell::const_new();

/// Returns the process-wide Cost Explorer client, building it on first use.
///
/// Credentials and region come from the ambient Lambda execution role; the
/// handle lives for the rest of the process and is reused across invocations.
pub async fn ce_client() -> &'static Client {
    CE_CLIENT
        .get_or_init(|| async {
            let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
            debug!("Cost Explorer client initialized");
            Client::new(&config)
        })
        .await
}
