use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use deli_hours::{config::Config, logger, server::server::Server, site::Site};
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(version, about = "Serves opening hours and headlines for the deli website")]
struct Args {
    /// JSON config file. The built-in schedule is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the config.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        None => Config::default(),
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(path = %path.display(), "{}", err);
                return ExitCode::FAILURE;
            }
        },
    };
    if let Some(bind) = args.bind {
        config.bind = bind;
    }

    let site = match Site::start(&config) {
        Ok(site) => site,
        Err(err) => {
            tracing::error!("Invalid config: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let server = Server::setup(site.state().clone());

    let listener = match TcpListener::bind(&config.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(bind = %config.bind, "Could not bind: {}", err);
            site.shutdown().await;
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(bind = %config.bind, "Listening");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let (stream, _) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(err) => {
                    tracing::warn!("Could not accept connection: {}", err);
                    continue;
                }
            },
            _ = &mut shutdown => break,
        };
        let io = TokioIo::new(stream);
        let server_clone = server.clone();
        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .serve_connection(io, server_clone)
                .await
            {
                tracing::warn!("Connection error: {}", err);
            }
        });
    }

    tracing::info!("Shutting down");
    site.shutdown().await;
    ExitCode::SUCCESS
}
