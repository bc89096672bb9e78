// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard hand ranking server.
//!
//! Serves the hand classifier over HTTP with two routes:
//!
//! - `GET /` health check.
//! - `POST /rank` ranks a plain text hand, e.g. `2H 3D 5S 10C KD`, and
//!   replies with the hand description. Malformed hands get a 400 with the
//!   validation error, the classifier itself cannot fail on a valid hand.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use actix_web::{App, HttpResponse, HttpServer, Responder, middleware::Logger, web};
use anyhow::{Context, Result};
use log::info;

use fivecard_rank::{Hand, rank_hand};

/// Server config.
#[derive(Debug)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
    /// The number of server workers.
    pub workers: usize,
}

/// Server entry point.
pub async fn run(config: Config) -> Result<()> {
    info!(
        "Starting server listening on {}:{}",
        config.address, config.port
    );

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .configure(routes)
    })
    .workers(config.workers)
    .bind((config.address.as_str(), config.port))
    .context("server bind error")?
    .run()
    .await
    .context("server run error")
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health))
        .route("/rank", web::post().to(rank));
}

/// Health check endpoint.
async fn health() -> impl Responder {
    HttpResponse::Ok().json("OK")
}

/// Ranks a plain text five cards hand.
async fn rank(body: web::Bytes) -> impl Responder {
    let Ok(body) = std::str::from_utf8(&body) else {
        return HttpResponse::BadRequest().body("invalid utf-8 body");
    };

    match body.trim().parse::<Hand>() {
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
        Ok(hand) => {
            let ranked = rank_hand(&hand);
            info!("Ranked {hand} as {}", ranked.rank());
            HttpResponse::Ok().json(ranked.description())
        }
    }
}
