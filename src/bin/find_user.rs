use log::error;
use std::process::ExitCode;
use userprobe::config::CONFIG;
use userprobe::{PostgresStorage, ProbeError, ProbeService, render_user};

async fn run() -> Result<(), ProbeError> {
    let database_url = CONFIG.database_url.as_deref().ok_or(ProbeError::MissingDatabaseUrl)?;
    let storage = PostgresStorage::connect(database_url, CONFIG.db_acquire_timeout).await?;
    let service = ProbeService::new(storage);

    let lookup = service.find_user_by_email(&CONFIG.lookup_email).await;
    service.into_storage().close().await;

    println!("{}", render_user(lookup?.as_ref())?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&CONFIG.log_level)).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("find-user failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
