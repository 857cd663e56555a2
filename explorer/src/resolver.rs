//! LookupResolver - live lookup with static fallback.
//!
//! One remote attempt per call. A non-empty answer is LIVE. An empty answer
//! or a transport failure falls back to the built-in table, and the outcome
//! collapses to CACHED, NONE or ERROR.

use std::sync::Arc;
use tracing::{debug, info, warn};
use university_directory::{InstitutionRecord, StaticDirectory, MULTIPLE_COUNTRIES};

use crate::backend::hipolabs::HipolabsBackend;
use crate::backend::traits::{BackendError, DirectoryBackend, RemoteQuery};
use crate::cache::{CacheKey, ResultCache};
use crate::config::ExplorerConfig;
use crate::result::{FallbackReason, LookupKind, LookupResult};

/// Resolves university queries to `(records, provenance)`.
///
/// Holds no mutable state apart from the optional results cache, so a single
/// resolver can be shared across tasks.
pub struct LookupResolver {
    backend: Arc<dyn DirectoryBackend>,
    directory: StaticDirectory,
    cache: Option<ResultCache>,
}

impl LookupResolver {
    /// Create a resolver over a backend and the built-in table, without a cache.
    pub fn new(backend: Arc<dyn DirectoryBackend>) -> Self {
        Self {
            backend,
            directory: StaticDirectory::builtin(),
            cache: None,
        }
    }

    /// Build the Hipo-backed resolver described by `config`.
    pub fn from_config(config: &ExplorerConfig) -> Result<Self, BackendError> {
        let backend = HipolabsBackend::new(&config.base_url, config.timeout())?;

        let mut resolver = Self::new(Arc::new(backend));
        if config.cache.enabled {
            resolver = resolver.with_cache(ResultCache::from_config(&config.cache));
        }

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            cache = config.cache.enabled,
            "Lookup resolver ready"
        );
        Ok(resolver)
    }

    /// Use a different fallback table.
    pub fn with_directory(mut self, directory: StaticDirectory) -> Self {
        self.directory = directory;
        self
    }

    /// Serve repeated queries from a results cache.
    pub fn with_cache(mut self, cache: ResultCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn directory(&self) -> &StaticDirectory {
        &self.directory
    }

    pub fn cache(&self) -> Option<&ResultCache> {
        self.cache.as_ref()
    }

    /// Institutions in a country.
    ///
    /// Fallback records carry the canonical country of the matched entry.
    pub async fn resolve_by_country(&self, query: &str) -> LookupResult {
        self.resolve(LookupKind::ByCountry, query).await
    }

    /// Institutions whose name contains the query.
    ///
    /// Fallback searches every entry; records read "Multiple countries available".
    pub async fn resolve_by_name(&self, query: &str) -> LookupResult {
        self.resolve(LookupKind::ByName, query).await
    }

    async fn resolve(&self, kind: LookupKind, query: &str) -> LookupResult {
        let query = query.trim();
        if query.is_empty() {
            debug!(kind = ?kind, "Blank query, nothing to look up");
            return LookupResult::miss(FallbackReason::EmptyResult);
        }

        let key = CacheKey::new(kind, query);
        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(&key)) {
            return hit;
        }

        let remote_query = match kind {
            LookupKind::ByCountry => RemoteQuery::Country(query.to_string()),
            LookupKind::ByName => RemoteQuery::Name(query.to_string()),
        };

        let reason = match self.backend.search(&remote_query).await {
            Ok(institutions) if !institutions.is_empty() => {
                debug!(
                    backend = self.backend.id(),
                    count = institutions.len(),
                    query,
                    "Live lookup succeeded"
                );
                let records = institutions
                    .into_iter()
                    .map(|remote| remote.into_record())
                    .collect();
                let result = LookupResult::live(records);
                self.remember(key, &result);
                return result;
            }
            Ok(_) => {
                info!(backend = self.backend.id(), query, "Live lookup returned no results");
                FallbackReason::EmptyResult
            }
            Err(e) => {
                warn!(
                    backend = self.backend.id(),
                    query,
                    error = %e,
                    "Live lookup failed, using built-in directory"
                );
                FallbackReason::TransportFailure
            }
        };

        let records = match kind {
            LookupKind::ByCountry => self.fallback_by_country(query),
            LookupKind::ByName => self.fallback_by_name(query),
        };
        let result = LookupResult::fallback(records, reason);

        debug!(
            kind = ?kind,
            query,
            provenance = %result.provenance(),
            count = result.len(),
            "Fallback resolved"
        );

        // A failed exchange says nothing about what the service holds
        if reason == FallbackReason::EmptyResult {
            self.remember(key, &result);
        }
        result
    }

    fn fallback_by_country(&self, query: &str) -> Vec<InstitutionRecord> {
        match self.directory.match_country(query) {
            Some(hit) => {
                debug!(query, key = hit.key, phase = ?hit.phase, "Built-in directory match");
                hit.institutions()
                    .iter()
                    .map(|name| InstitutionRecord::synthesized(name, hit.country()))
                    .collect()
            }
            None => Vec::new(),
        }
    }

    fn fallback_by_name(&self, query: &str) -> Vec<InstitutionRecord> {
        self.directory
            .search_names(query)
            .into_iter()
            .map(|m| InstitutionRecord::synthesized(m.name, MULTIPLE_COUNTRIES))
            .collect()
    }

    fn remember(&self, key: CacheKey, result: &LookupResult) {
        if let Some(cache) = &self.cache {
            cache.insert(key, result.clone());
        }
    }
}
