use playlist_server_lib::config::ServerConfig;

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rolling_logger::init_logger(&config.log_dir, "PlaylistServer") {
        eprintln!("Failed to init rolling logger: {}", e);
    }
    let _ = rolling_logger::info(&format!("Playlist server starting on {}", config.bind_address()));

    if let Err(e) = playlist_server_lib::run(config).await {
        let message = format!("Server exited with error: {}", e);
        if rolling_logger::error(&message).is_err() {
            eprintln!("{}", message);
        }
        std::process::exit(1);
    }
}
