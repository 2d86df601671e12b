use crate::cache::CacheStore;
use crate::download::PlayOptions;
use crate::identifier::{Identifier, Registry};
use crate::player::PlayerCandidate;
use url::Url;

#[derive(Debug, Clone)]
pub struct PlayParams {
    pub cache: CacheStore,
    pub identifier: Identifier,
    pub base_url: Url,
    pub user_agent: String,
    pub players: Vec<PlayerCandidate>,
    pub options: PlayOptions,
}

#[derive(Debug, Clone)]
pub struct ListParams {
    pub cache: CacheStore,
    pub registry: Registry,
}

#[derive(Debug, Clone)]
pub struct CleanParams {
    pub cache: CacheStore,
    pub all: bool,
}
