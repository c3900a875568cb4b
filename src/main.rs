use std::io::{stdin, stdout, Write};
use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing::level_filters::LevelFilter;

use solana_wallet_inspector::providers::{auto_approve, Approval};
use solana_wallet_inspector::server::{self, ApiState};
use solana_wallet_inspector::ui::DisplayState;
use solana_wallet_inspector::traits::InspectionEventHandler;
use solana_wallet_inspector::{
  AccountInspector, CompositeEventHandler, ConsoleEventHandler,
  InjectedProvider, InspectorConfig, JsonEventHandler, KeypairProvider,
  RpcLedgerClient, WalletApp, WalletConnector, WalletProvider,
};

#[derive(Parser, Debug)]
#[command(name = "wallet-inspector", version, about)]
struct Args {
  #[command(subcommand)]
  command: Command,
  #[arg(long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List wallet providers and whether they are available
  Providers,
  /// Connect a provider and show its holdings above the threshold.
  /// Exits with status 2 if the wallet could not be connected.
  Connect {
    #[arg(long)]
    provider: String,
    /// Approve the connection without asking
    #[arg(long)]
    yes: bool,
    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
  },
  /// Show holdings above the threshold for any account
  Inspect {
    #[arg(value_name = "ACCOUNT")]
    account: String,
    /// Print the inspection result as JSON
    #[arg(long)]
    json: bool,
  },
  /// Serve GET /api/balance/{account_id}
  Serve {
    #[arg(long)]
    port: Option<u16>,
  },
}

fn prompt_approval(name: &str) -> bool {
  print!("Allow {name} to share its public key? [y/N] ");
  if stdout().flush().is_err() {
    return false;
  }
  let mut input = String::new();
  if stdin().read_line(&mut input).is_err() {
    return false;
  }
  matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

fn build_providers(
  config: &InspectorConfig,
  approval: Approval,
) -> Vec<Arc<dyn WalletProvider>> {
  let phantom =
    InjectedProvider::phantom(config.phantom_pubkey.clone(), approval.clone());
  let solflare =
    InjectedProvider::solflare(config.solflare_pubkey.clone(), approval);
  let keypair = KeypairProvider::new(config.keypair_path.clone());

  vec![
    Arc::new(phantom) as Arc<dyn WalletProvider>,
    Arc::new(solflare),
    Arc::new(keypair),
  ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  let args = Args::parse();

  // Initialize logging
  tracing_subscriber::fmt()
    .with_level(true)
    .with_target(false)
    .with_max_level(if args.verbose {
      LevelFilter::DEBUG
    } else {
      LevelFilter::INFO
    })
    .with_file(true)
    .with_line_number(true)
    .init();

  let config = InspectorConfig::from_env()?;

  match args.command {
    Command::Providers => {
      let connector =
        WalletConnector::new(build_providers(&config, auto_approve()));
      for provider in connector.list_providers() {
        let state = if provider.present { "available" } else { "not found" };
        println!("{:<10} {}", provider.name, state);
      }
    }

    Command::Connect { provider, yes, json } => {
      let approval: Approval =
        if yes { auto_approve() } else { Arc::new(prompt_approval) };

      info!("RPC URL: {}", config.rpc_url);
      let ledger = Arc::new(RpcLedgerClient::initialize(&config).await?);
      let connector =
        Arc::new(WalletConnector::new(build_providers(&config, approval)));
      let inspector = Arc::new(AccountInspector::from_config(ledger, &config));

      let mut handlers = CompositeEventHandler::new();
      handlers.add_handler(Arc::new(ConsoleEventHandler::new()));
      if json {
        handlers.add_handler(Arc::new(JsonEventHandler::new()));
      }
      let handler: Arc<dyn InspectionEventHandler> = Arc::new(handlers);
      let app = WalletApp::new(connector, inspector, handler);

      let outcome = app.on_connect(&provider).await;
      if !json {
        println!("{}", app.display().await.render());
      }

      app.on_disconnect().await;
      // the handlers have already reported the error
      if let Err(e) = outcome {
        std::process::exit(if e.is_connect_error() { 2 } else { 1 });
      }
    }

    Command::Inspect { account, json } => {
      info!("RPC URL: {}", config.rpc_url);
      let ledger = Arc::new(RpcLedgerClient::initialize(&config).await?);
      let inspector = AccountInspector::from_config(ledger, &config);

      let mut display = DisplayState::default();
      match inspector.inspect(&account).await {
        Ok(result) if json => {
          println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Ok(result) => {
          display.show_status(format!("Account {}", result.account));
          display.show_inspection(&result);
          println!("{}", display.render());
        }
        Err(e) => {
          display.show_error(&e);
          println!("{}", display.render());
          return Err(e.into());
        }
      }
    }

    Command::Serve { port } => {
      let ledger = Arc::new(RpcLedgerClient::initialize(&config).await?);
      let state = ApiState::new(ledger, config.query_timeout);
      let addr = SocketAddr::from(([127, 0, 0, 1], port.unwrap_or(config.api_port)));

      tokio::select! {
        result = server::serve(state, addr) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutting down..."),
      }
    }
  }

  Ok(())
}
