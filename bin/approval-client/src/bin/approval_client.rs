use std::env;
use std::str::FromStr;
use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use color_eyre::{eyre::Context, Result};
use dotenv::dotenv;
use portico_approval_client_bin::config::{Config, ItemConfig};
use portico_client::{
    approved_item_amounts, get_approval_actions, ProviderApprovalReader, ProviderSigner,
    SignerAccount,
};
use portico_primitives::{InsufficientApproval, Item};
use tracing_subscriber::EnvFilter;

/// Portico approval client
/// - reads the approvals an owner grants an operator for the configured items
/// - builds approval actions for the items the operator cannot move yet
/// - submits them when `submit_transactions` is set, otherwise simulates them with `eth_call`
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config_path =
        env::var("APPROVAL_CLIENT_CONFIG").unwrap_or_else(|_| "config.json".to_string());
    let config = Config::from_file(&config_path).context("Failed to load config")?;

    // setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_max_level(config.log_level()?)
        .init();

    let rpc_url = config.rpc_url().context("Invalid RPC URL")?;
    let priv_key = env::var("OWNER_PRIVATE_KEY").context("OWNER_PRIVATE_KEY not set")?;
    let signer = PrivateKeySigner::from_str(&priv_key)?;
    let signer_address = signer.address();
    let owner = config.owner(signer_address)?;

    tracing::info!("Setting up RPC provider");
    let rpc_provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(rpc_url);

    let reader = ProviderApprovalReader::new(rpc_provider.clone());
    let items: Vec<Item> = config.items.iter().map(ItemConfig::item).collect();
    let approved = approved_item_amounts(owner, &items, config.operator, &reader).await?;

    // operator approvals read as MAX_INT or zero, so one comparison covers every item type
    let insufficient_approvals: Vec<InsufficientApproval> = config
        .items
        .iter()
        .zip(&approved)
        .filter(|(item, approved)| **approved < item.amount)
        .map(|(item, _)| InsufficientApproval {
            token: item.token,
            operator: config.operator,
            item_type: item.item_type,
            identifier_or_criteria: item.identifier_or_criteria,
        })
        .collect();

    tracing::info!(
        "{} of {} items need approval for operator {}",
        insufficient_approvals.len(),
        items.len(),
        config.operator
    );

    // owner equals the signing key whenever transactions are submitted
    let approval_signer = Arc::new(ProviderSigner::new(
        rpc_provider.clone(),
        SignerAccount::Local(owner),
    ));
    let actions = get_approval_actions(&insufficient_approvals, approval_signer).await?;

    for action in &actions {
        tracing::info!("approval action: {}", serde_json::to_string(action)?);
    }

    if !config.submit_transactions {
        for action in &actions {
            let request = action.transaction_request.details().to_transaction_request();
            match rpc_provider.call(&request).await {
                Ok(_) => tracing::info!(token = %action.token, "approval simulated"),
                Err(e) => tracing::warn!(token = %action.token, "approval simulation failed: {e}"),
            }
        }
        tracing::info!("submit_transactions is off, nothing sent");
        return Ok(());
    }

    // one at a time so the nonce filler hands out sequential nonces
    for action in &actions {
        let pending = action.transaction_request.send().await?;
        tracing::info!(
            token = %action.token,
            tx_hash = %pending.tx_hash(),
            "approval submitted"
        );
    }

    Ok(())
}
