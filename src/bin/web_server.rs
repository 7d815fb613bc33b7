use shortest_path::web::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut config = ServerConfig::default();
    if let Some(port) = args.get(1) {
        config.port = port.parse()?;
    }

    println!("🔧 Starting shortest path web server...");
    println!("⚙️  Configuration:");
    println!("   📡 Address: {}:{}", config.host, config.port);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!("   👥 Max sessions: {}", config.max_sessions);
    println!();

    start_server(config).await?;

    Ok(())
}
