use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use weather_monitor::app::{AppState, create_app};
use weather_monitor::config::{Config, DEFAULT_WEATHER_API_URL};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: String,

    #[arg(long, env = "WEATHER_API_URL", default_value = DEFAULT_WEATHER_API_URL)]
    weather_api_url: String,

    /// Address advertised in integration.json, derived from requests if unset.
    #[arg(long, env = "PUBLIC_URL")]
    public_url: Option<String>,

    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    port: u16,

    #[arg(short, long, env = "KEY_FILE_PATH", requires = "cert_file_path")]
    key_file_path: Option<String>,

    #[arg(short, long, env = "CERT_FILE_PATH", requires = "key_file_path")]
    cert_file_path: Option<String>,
}

#[tokio::main]
async fn main() {
    // Read before the logger so RUST_LOG can come from the file as well.
    let dotenv_path = dotenv::dotenv().ok();
    env_logger::init();
    if let Some(path) = dotenv_path {
        log::info!("loaded environment from {}", path.display());
    }

    let args = Args::parse();

    let config = Config {
        api_key: args.api_key,
        weather_api_url: args.weather_api_url,
        public_url: args.public_url,
    };
    let app = create_app(AppState::new(config, reqwest::Client::new()));

    let addr = SocketAddr::new(args.host, args.port);

    log::info!("listening on {}", addr);
    if let (Some(key_file_path), Some(cert_file_path)) = (args.key_file_path, args.cert_file_path)
    {
        log::info!(
            "using tls with key file {} and cert file {}",
            key_file_path,
            cert_file_path
        );
        let tls = RustlsConfig::from_pem_file(cert_file_path, key_file_path)
            .await
            .expect("failed to load tls key and certificate");
        axum_server::bind_rustls(addr, tls)
            .serve(app.into_make_service())
            .await
            .expect("server failed");
    } else {
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
            .expect("server failed");
    }
}
