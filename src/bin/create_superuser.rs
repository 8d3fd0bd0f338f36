use apex_api::config::EnvConfig;
use apex_api::db::service::DbService;
use clap::Parser;
use tracing::info;

/// Create an administrative account.
#[derive(Parser, Debug)]
#[command(name = "create_superuser")]
struct Args {
    #[arg(long)]
    email: String,

    #[arg(long)]
    full_name: String,

    /// Leave out to create the account without a usable password.
    #[arg(long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = EnvConfig::from_env()?;

    let db = DbService::new(&config.db_url).await?;
    let account = db
        .create_superuser(&args.email, &args.full_name, args.password.as_deref())
        .await?;

    info!("superuser {} ready", account.id);
    println!("Superuser created: {} <{}>", account, account.email);
    Ok(())
}
