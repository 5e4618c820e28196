use crate::config::Config;
use mongodb::{Client as MongoClient, Database};

pub struct AppState {
    pub config: Config,
    pub mongo: Database,
}

impl AppState {
    pub async fn new(config: Config, mongo_client: MongoClient) -> anyhow::Result<Self> {
        let mongo = mongo_client.database(&config.mongo_database);

        Ok(Self { config, mongo })
    }
}

pub mod profile_service;
