// ABOUTME: Coach chat commands for seneca-cli
// ABOUTME: Logs in, sends a message with an optional voice clip, and prints the transcript
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use seneca_coach::coach::CoachSession;
use seneca_coach::config::BackendConfig;
use seneca_coach::external::BackendClient;
use seneca_coach::voice::VoiceClip;

use crate::helpers::display::display_message;

/// Log in and print the welcome message
pub async fn login(config: &BackendConfig, user_id: &str) -> Result<()> {
    let mut session = CoachSession::new(BackendClient::new(&config.base_url));
    let welcome = session.login(user_id).await?;
    display_message(welcome);
    Ok(())
}

/// Log in, send one message, and print the exchange
pub async fn chat(
    config: &BackendConfig,
    user_id: &str,
    message: &str,
    voice: Option<&Path>,
) -> Result<()> {
    let clip = voice.map(VoiceClip::from_wav_file).transpose()?;
    if let Some(clip) = &clip {
        info!(
            seconds = clip.duration().as_secs_f64(),
            sample_rate = clip.sample_rate(),
            "Voice clip loaded"
        );
    }

    let mut session = CoachSession::new(BackendClient::new(&config.base_url));
    session.login(user_id).await?;

    if session.send_message(message, clip.as_ref()).await.is_none() {
        bail!("Nothing to send: the message is empty");
    }

    if let Some(status) = session.fatigue_status() {
        println!("Fatigue: {status}");
    }
    for entry in session.messages() {
        display_message(entry);
    }
    Ok(())
}
