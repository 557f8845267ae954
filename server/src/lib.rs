//! Todo REST service.
//!
//! # Overview
//! An axum router exposing list/get/create/update/delete over `/todos`. All
//! state lives behind the `TodoRepository` trait; the router is built around
//! whichever implementation the caller passes in.
//!
//! # Design
//! - `app` takes the repository explicitly so tests can substitute their own.
//! - `run` serves on an already-bound listener, letting callers pick the port
//!   (tests bind `127.0.0.1:0`).

use std::{future::Future, sync::Arc};

use axum::{http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod repository;
pub mod todo;

pub use config::{ConfigError, ServerConfig};
pub use controller::SharedRepository;
pub use error::{ApiError, RepoError};
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use todo::{CreateTodo, Todo, TodoId, UpdateTodo};

pub fn app(repo: SharedRepository) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(controller::routes(repo))
}

/// Router backed by a fresh in-memory repository.
pub fn in_memory_app() -> Router {
    app(Arc::new(InMemoryTodoRepository::new()))
}

pub async fn run(listener: TcpListener, repo: SharedRepository) -> Result<(), std::io::Error> {
    axum::serve(listener, app(repo)).await
}

/// Like [`run`], but stops accepting connections once `shutdown` resolves.
pub async fn run_until<F>(
    listener: TcpListener,
    repo: SharedRepository,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(repo))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
