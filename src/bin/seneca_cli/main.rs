// ABOUTME: Seneca CLI - command-line driver for the coaching client
// ABOUTME: Replays recorded pose frames, chats with the coach, analyzes food photos, runs the food proxy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors
//!
//! Usage:
//! ```bash
//! # Count squats in a recorded landmark stream (one JSON frame per line)
//! seneca-cli replay frames.jsonl --exercise squats
//!
//! # Log in and read the welcome message
//! seneca-cli login user_00001
//!
//! # Ask the coach something, with a voice clip for fatigue detection
//! seneca-cli chat user_00001 "Suggest a quick workout" --voice clip.wav
//!
//! # Analyze a meal photo and show the day's goal progress
//! seneca-cli food lunch.jpg
//!
//! # Run the local food analysis proxy
//! seneca-cli proxy --port 3000
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use seneca_coach::config::CoachConfig;
use seneca_coach::http_client::initialize_shared_client;
use seneca_coach::logging::LoggingConfig;
use seneca_core::models::Exercise;

#[derive(Parser)]
#[command(
    name = "seneca-cli",
    about = "Seneca fitness coach CLI",
    long_about = "Command-line driver for the Seneca coaching client: workout replay, coach chat, food analysis, and the food analysis proxy."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Replay recorded landmark frames through a workout session
    Replay {
        /// JSON-lines file, one `{"t_ms": .., "landmarks": [..]}` frame per line
        file: PathBuf,

        /// Exercise performed (push-ups, squats, planks, lunges, burpees)
        #[arg(long, short = 'e', default_value = "squats")]
        exercise: Exercise,

        /// Override the minimum hold time between positions (ms)
        #[arg(long)]
        min_hold_ms: Option<u64>,

        /// Print every frame report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log in and print the coach's welcome
    Login {
        /// User id
        user_id: String,
    },

    /// Log in and send one message to the coach
    Chat {
        /// User id
        user_id: String,

        /// Message text
        message: String,

        /// WAV voice clip for fatigue detection
        #[arg(long)]
        voice: Option<PathBuf>,
    },

    /// Analyze a food photo
    Food {
        /// Image file
        image: PathBuf,

        /// User id sent with the photo (defaults to SENECA_USER_ID)
        #[arg(long)]
        user_id: Option<String>,
    },

    /// Run the local food analysis proxy
    Proxy {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port override (defaults to SENECA_PROXY_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CoachConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.backend.base_url = api_url.trim_end_matches('/').to_owned();
        config.validate()?;
    }
    LoggingConfig::from_config(&config).verbose(cli.verbose).init()?;
    initialize_shared_client(
        config.backend.timeout_secs,
        config.backend.connect_timeout_secs,
    );
    info!(
        environment = %config.environment,
        backend = %config.backend.base_url,
        "Seneca CLI starting"
    );
    debug!("{}", config.summary());

    match cli.command {
        Command::Replay {
            file,
            exercise,
            min_hold_ms,
            json,
        } => {
            if let Some(ms) = min_hold_ms {
                config.pose.rep_min_hold_ms = ms;
            }
            commands::replay::run(&config.pose, &file, exercise, json)?;
        }
        Command::Login { user_id } => {
            commands::coach::login(&config.backend, &user_id).await?;
        }
        Command::Chat {
            user_id,
            message,
            voice,
        } => {
            commands::coach::chat(&config.backend, &user_id, &message, voice.as_deref()).await?;
        }
        Command::Food { image, user_id } => {
            let user_id = user_id.unwrap_or_else(|| config.backend.user_id.clone());
            commands::food::analyze(&config, &image, &user_id).await?;
        }
        Command::Proxy { host, port } => {
            let port = port.unwrap_or(config.proxy_port);
            commands::proxy::run(&config.backend, &host, port).await?;
        }
    }

    Ok(())
}
