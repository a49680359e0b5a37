use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use config::ConfigError;
use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::{
    entities::github::{
        fallback_profile, fallback_repositories, GithubProfile, GithubRepoPayload, GithubRepository,
        ProfileSnapshot,
    },
    github::GithubApi,
    settings::AppConfig,
};

pub const DEFAULT_REPOSITORY_LIMIT: usize = 4;

/// Cached view of the organisation's public GitHub profile.
///
/// The snapshot is refreshed at most once per `ttl`; concurrent callers that
/// find it stale wait on a single refresh instead of each calling the API.
/// Failures are replaced by the fixed fallback dataset, so callers always get data.
pub struct GithubProfileService {
    api: Arc<dyn GithubApi>,
    username: String,
    ttl: Duration,
    snapshot: RwLock<Option<ProfileSnapshot>>,
    refresh_gate: Mutex<()>,
}

impl GithubProfileService {
    pub fn new(api: Arc<dyn GithubApi>, username: &str, ttl: Duration) -> Self {
        GithubProfileService {
            api,
            username: username.to_string(),
            ttl,
            snapshot: RwLock::new(None),
            refresh_gate: Mutex::new(()),
        }
    }

    pub fn from_config(config: &AppConfig, api: Arc<dyn GithubApi>) -> Result<Self, ConfigError> {
        let ttl = Duration::try_hours(config.github_cache_hours).ok_or_else(|| {
            ConfigError::Message(format!(
                "GITHUB_CACHE_HOURS out of range: {}",
                config.github_cache_hours
            ))
        })?;
        Ok(Self::new(api, &config.github_username, ttl))
    }

    pub async fn get_profile_data(&self, limit: usize) -> (GithubProfile, Vec<GithubRepository>) {
        self.get_profile_data_at(limit, Utc::now()).await
    }

    /// Same as `get_profile_data` with an explicit clock reading.
    pub async fn get_profile_data_at(
        &self,
        limit: usize,
        now: DateTime<Utc>,
    ) -> (GithubProfile, Vec<GithubRepository>) {
        if let Some(fresh) = self.fresh_snapshot(limit, now) {
            return fresh;
        }

        let _gate = self.refresh_gate.lock().await;

        // Another caller may have refreshed while we waited
        if let Some(fresh) = self.fresh_snapshot(limit, now) {
            return fresh;
        }

        let snapshot = self.refresh(now).await;
        let result = truncated(&snapshot, limit);
        *self.snapshot.write() = Some(snapshot);
        result
    }

    fn fresh_snapshot(
        &self,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Option<(GithubProfile, Vec<GithubRepository>)> {
        let guard = self.snapshot.read();
        let snapshot = guard.as_ref()?;
        (now - snapshot.fetched_at < self.ttl).then(|| truncated(snapshot, limit))
    }

    async fn refresh(&self, now: DateTime<Utc>) -> ProfileSnapshot {
        let (profile, repositories) =
            futures::join!(self.api.fetch_profile(), self.api.fetch_repositories());

        let profile = match profile {
            Ok(payload) => GithubProfile::from_payload(payload, &self.username),
            Err(e) => {
                tracing::warn!(username = %self.username, "GitHub profile unavailable, using fallback: {}", e);
                fallback_profile()
            }
        };

        let repositories = match repositories {
            Ok(payloads) => rank_repositories(payloads),
            Err(e) => {
                tracing::warn!(username = %self.username, "GitHub repositories unavailable, using fallback: {}", e);
                fallback_repositories()
            }
        };

        tracing::debug!(repositories = repositories.len(), "GitHub snapshot refreshed");

        ProfileSnapshot {
            profile,
            repositories,
            fetched_at: now,
        }
    }
}

/// Most popular first: stars, then forks, then most recent activity.
fn rank_repositories(mut payloads: Vec<GithubRepoPayload>) -> Vec<GithubRepository> {
    payloads.sort_by(|a, b| b.popularity_key().cmp(&a.popularity_key()));
    payloads.into_iter().map(GithubRepository::from).collect()
}

fn truncated(snapshot: &ProfileSnapshot, limit: usize) -> (GithubProfile, Vec<GithubRepository>) {
    (
        snapshot.profile.clone(),
        snapshot.repositories.iter().take(limit).cloned().collect(),
    )
}
