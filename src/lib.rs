#![doc = include_str!("../README.md")]

/*
 * Student Records API - a small CRUD service for students and their marks.
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use std::net::SocketAddr;

use axum::body::Body;
use sqlx::MySql;
use sqlx::pool::PoolOptions;

use self::services::{HealthService, MarkService, StudentService};
use self::store::{MySqlStore, Store};

/// The server type that wraps the API.
pub type Server =
	axum::extract::connect_info::IntoMakeServiceWithConnectInfo<axum::Router, SocketAddr>;

pub mod setup;
pub mod runtime;

pub mod http;
pub mod services;
pub mod store;

mod database;
mod middleware;
mod util;

#[cfg(test)]
mod testing;

/// Create a server that will run the API.
///
/// This connects to the database and applies any pending migrations.
pub async fn server(config: runtime::Config) -> Result<Server, setup::Error>
{
	let database = PoolOptions::<MySql>::new()
		.min_connections(config.min_connections())
		.max_connections(config.max_connections())
		.connect(config.database_url().as_str())
		.await?;

	tracing::debug!("running migrations");

	sqlx::migrate!("./database/migrations")
		.run(&database)
		.await?;

	let server = router(MySqlStore::new(database))
		.into_make_service_with_connect_info::<SocketAddr>();

	Ok(server)
}

/// Builds all the API's routes on top of the given `store`.
pub fn router<S>(store: S) -> axum::Router
where
	S: Store,
{
	let health_svc = HealthService::new(store.clone());
	let student_svc = StudentService::new(store.clone());
	let mark_svc = MarkService::new(store);

	let logging = middleware::logging::layer::<Body, Body>();
	let cors = middleware::cors::layer();
	let panic_handler = middleware::panic_handler::layer();

	axum::Router::new()
		.merge(health_svc)
		.merge(student_svc)
		.merge(mark_svc)
		.layer(logging)
		.layer(cors)
		.layer(panic_handler)
}
