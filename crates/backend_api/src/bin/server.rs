use backend_api::{run_server, FileRecordStore};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment variables with sane defaults
    let database_dir = PathBuf::from(
        env::var("DATABASE_DIR").unwrap_or_else(|_| "database".to_string()),
    );
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    println!("Finance Dashboard API Server");
    println!("============================");
    println!("Database dir: {}", database_dir.display());
    println!("Listening on: {}:{}", host, port);
    println!();

    // Pre-flight check: a missing database directory is not fatal, the
    // dashboard serves the fallback dataset until records exist.
    if !database_dir.exists() {
        eprintln!(
            "[WARN] database directory not found at: {}",
            database_dir.display()
        );
        eprintln!("       Continuing; dashboard will serve fallback data until it exists.");
    }

    let store = Arc::new(FileRecordStore::new(database_dir));

    run_server(store, &host, port).await?;

    Ok(())
}
