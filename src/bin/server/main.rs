//! Student Records API - a small CRUD service for students and their marks.
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Student Records API
#[derive(Debug, Parser)]
struct Args
{
	/// Use a custom `.env` file.
	#[arg(long, value_name = "FILE")]
	env_file: Option<PathBuf>,
}

/// The main server entrypoint for the API.
#[tokio::main]
async fn main() -> color_eyre::Result<()>
{
	color_eyre::install()?;

	let args = Args::parse();

	let dotenv = match args.env_file.as_deref() {
		Some(path) => dotenvy::from_filename(path).map(drop).wrap_err("load custom `.env` file"),
		None => dotenvy::dotenv().map(drop).wrap_err("load `.env` file"),
	};

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("student_records=info,tower_http=info")),
		)
		.init();

	if let Err(error) = dotenv {
		// missing `.env` files are fine as long as the environment is set up
		// some other way (e.g. in CI)
		tracing::warn!(?error, "no `.env` file loaded");
	}

	student_records::runtime::panic_hook::install();

	let config = student_records::runtime::Config::new().wrap_err("load config")?;

	tracing::debug!(?config, "loaded config");

	let tcp_listener = TcpListener::bind(config.addr())
		.await
		.wrap_err_with(|| format!("bind to {}", config.addr()))?;

	let server = student_records::server(config).await.wrap_err("setup server")?;

	tracing::info!("listening on {}", tcp_listener.local_addr()?);

	axum::serve(tcp_listener, server)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	tracing::info!("shut down");

	Ok(())
}

/// Resolves once the process receives Ctrl-C.
async fn shutdown_signal()
{
	match tokio::signal::ctrl_c().await {
		Ok(()) => tracing::info!("received Ctrl-C, shutting down"),
		Err(error) => {
			tracing::error!(%error, "failed to listen for Ctrl-C; shutting down");
		}
	}
}
