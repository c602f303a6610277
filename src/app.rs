// src/app.rs
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, warn};

use bienebot_config::BienebotConfig;
use bienebot_core::{BienebotError, BienebotResult};
use bienebot_nlu::LuisClient;
use bienebot_responses::ResponseCatalog;
use bienebot_router::IntentRouter;

pub struct BienebotApp {
    router: IntentRouter,
}

impl BienebotApp {
    pub fn new(config: BienebotConfig) -> BienebotResult<Self> {
        info!("Initializing bienebot components...");

        let resolver = Arc::new(LuisClient::new(config.nlu)?);
        let catalog = Arc::new(ResponseCatalog::load(&config.responses.data_dir)?);
        let router = IntentRouter::new(resolver, catalog, config.router)?;

        Ok(Self { router })
    }

    /// Reads one query per stdin line and prints the reply fragments until
    /// EOF or ctrl-c.
    pub async fn run(&self) -> BienebotResult<()> {
        info!("bienebot ready, waiting for queries on stdin");

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
                line = lines.next_line() => {
                    match line? {
                        Some(query) => self.answer(&query).await,
                        None => break,
                    }
                }
            }
        }

        Ok(())
    }

    async fn answer(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        match self.router.route(query).await {
            Ok(reply) => {
                info!(
                    "Intent '{}' (score {:.2}), {} fragment(s)",
                    reply.intent,
                    reply.score,
                    reply.fragments.len()
                );
                for fragment in reply.fragments {
                    println!("{}", fragment);
                }
            }
            Err(BienebotError::NluUnavailable(reason)) => {
                warn!("NLU unavailable: {}", reason);
                println!("Sorry, I cannot reach the language service right now.");
            }
            Err(e) => {
                warn!("Routing failed: {}", e);
                println!("Sorry, something went wrong on my side.");
            }
        }
    }
}
