//! Command handlers. Each one loads the profile first, the way every view
//! does at session start.

use std::io::Write;

use anyhow::{Context, Result};
use ls_core::profile::{ProfilePatch, UserProfile};
use tracing::warn;

use crate::bootstrap::AppRuntime;
use crate::cli::Command;

pub async fn execute(command: &Command, runtime: &AppRuntime, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Show { json } => show(runtime, *json, out).await,
        Command::Greet => greet(runtime, out).await,
        Command::Set(args) => set(runtime, ProfilePatch::from(args.clone()), out).await,
        Command::Path => path(runtime, out),
    }
}

async fn show(runtime: &AppRuntime, json: bool, out: &mut dyn Write) -> Result<()> {
    let profile = runtime
        .load_profile()
        .execute()
        .await
        .context("Failed to load user profile")?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&profile)?)?;
    } else {
        write_profile(&profile, out)?;
    }
    Ok(())
}

/// A failed load degrades to the placeholder greeting instead of failing.
async fn greet(runtime: &AppRuntime, out: &mut dyn Write) -> Result<()> {
    if let Err(e) = runtime.load_profile().execute().await {
        warn!(error = %e, "greeting without a loaded profile");
        eprintln!("Warning: could not load user profile: {e:#}");
    }

    let name = runtime.store().greeting_name().await;
    writeln!(out, "Welcome back, {name}")?;
    Ok(())
}

async fn set(runtime: &AppRuntime, patch: ProfilePatch, out: &mut dyn Write) -> Result<()> {
    runtime
        .load_profile()
        .execute()
        .await
        .context("Failed to load user profile")?;

    let profile = runtime
        .update_profile()
        .execute(patch)
        .await
        .context("Failed to save user profile")?;

    writeln!(out, "Profile updated.")?;
    write_profile(&profile, out)?;
    Ok(())
}

fn path(runtime: &AppRuntime, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "storage: {}", runtime.storage_dir().display())?;
    writeln!(out, "config:  {}", runtime.config_path().display())?;
    Ok(())
}

fn write_profile(profile: &UserProfile, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "name:          {}", profile.name)?;
    writeln!(out, "email:         {}", profile.email)?;
    writeln!(out, "language:      {}", profile.language)?;
    writeln!(
        out,
        "notifications: {}",
        if profile.notifications { "on" } else { "off" }
    )?;
    writeln!(
        out,
        "theme:         {}",
        profile.theme.as_deref().unwrap_or("(not set)")
    )?;
    Ok(())
}
