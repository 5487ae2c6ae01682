//! Recommendation backend client.
//!
//! Two one-shot operations, each checking the session cache before going to
//! the network and caching whatever comes back successfully. The
//! recommendation path also adopts any `user_id` the backend mints.
//!
//! There is no retry, timeout or de-duplication of concurrent identical
//! requests: two rapid calls for the same key both reach the backend.

use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;

use crate::config::{self, DEFAULT_MAX_RESULTS, endpoints, messages};
use crate::core::cache::{CacheKey, SessionCache};
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::ApiError;
use crate::core::identity::IdentityHolder;
use crate::core::storage::{BrowserStorage, KeyValueStore, MemoryStorage};
use crate::models::{
    RecommendRequest, RecommendationResult, SearchOutcome, SearchRequest, SearchResult,
};
use crate::utils::console;
use crate::utils::fetch::{BrowserTransport, HttpTransport};

/// Client for the recommendation and product search endpoints.
pub struct ApiClient<T: HttpTransport> {
    transport: T,
    base_url: String,
    cache: SessionCache,
    identity: IdentityHolder,
}

impl ApiClient<BrowserTransport> {
    /// Client wired to the browser: Fetch API, sessionStorage cache,
    /// localStorage identity, configured base URL.
    pub fn browser() -> Self {
        let clock: Rc<dyn Clock> = Rc::new(SystemClock);
        let identity_store: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage::local());

        Self::new(
            BrowserTransport,
            config::api_base_url(),
            SessionCache::new(session_store(), clock),
            IdentityHolder::new(identity_store),
        )
    }
}

thread_local! {
    /// Stand-in session store for browsers that refuse sessionStorage.
    static FALLBACK_SESSION: MemoryStorage = MemoryStorage::new();
}

/// sessionStorage when the browser allows it, otherwise an in-memory map
/// that lives as long as the page.
fn session_store() -> Rc<dyn KeyValueStore> {
    if crate::utils::dom::session_storage().is_some() {
        Rc::new(BrowserStorage::session())
    } else {
        console::warn("sessionStorage unavailable, caching in memory");
        FALLBACK_SESSION.with(|store| Rc::new(store.clone()) as Rc<dyn KeyValueStore>)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(
        transport: T,
        base_url: impl Into<String>,
        cache: SessionCache,
        identity: IdentityHolder,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache,
            identity,
        }
    }

    pub fn identity(&self) -> &IdentityHolder {
        &self.identity
    }

    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    /// Get AI product suggestions for a free-text goal.
    ///
    /// Served from cache when the same goal (and identity, and preference)
    /// was answered within the TTL.
    pub async fn fetch_recommendations(
        &self,
        goal: &str,
        preference: Option<&str>,
    ) -> Result<RecommendationResult, ApiError> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(ApiError::InvalidInput(
                "Tell us what you're going for first".to_string(),
            ));
        }
        let preference = preference.map(str::trim).filter(|p| !p.is_empty());
        let user_id = self.identity.get_id();

        let key = CacheKey::recommend(goal, user_id.as_deref(), preference);
        if let Some(cached) = self.cache.get::<RecommendationResult>(&key) {
            console::debug(&format!("recommend: cache hit for {:?}", goal));
            return Ok(cached);
        }

        let request = RecommendRequest {
            vibe: goal,
            user_id: user_id.as_deref(),
            user_preference: preference,
        };
        let body = self
            .post(endpoints::RECOMMEND, &request, messages::RECOMMEND_FAILED)
            .await?;

        let result = RecommendationResult::from_json(&body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        if let Some(id) = &result.user_id {
            self.identity.set_id(id);
        }
        self.cache.set(&key, &result);

        Ok(result)
    }

    /// Search shopping platforms for one product name.
    ///
    /// `max_results` defaults to 10. Each (name, max_results) pair is cached
    /// independently.
    pub async fn search_products(
        &self,
        product_name: &str,
        max_results: Option<u32>,
    ) -> Result<SearchResult, ApiError> {
        let product_name = product_name.trim();
        if product_name.is_empty() {
            return Err(ApiError::InvalidInput("Pick a product to search for".to_string()));
        }
        let max_results = max_results.unwrap_or(DEFAULT_MAX_RESULTS);
        if max_results == 0 {
            return Err(ApiError::InvalidInput(
                "max_results must be at least 1".to_string(),
            ));
        }

        let key = CacheKey::search(product_name, max_results);
        if let Some(cached) = self.cache.get::<SearchResult>(&key) {
            console::debug(&format!("search: cache hit for {:?}", product_name));
            return Ok(cached);
        }

        let request = SearchRequest {
            product_name,
            max_results,
        };
        let body = self
            .post(endpoints::SEARCH_PRODUCTS, &request, messages::SEARCH_FAILED)
            .await?;

        let result = match SearchResult::from_json(&body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?
        {
            SearchOutcome::Found(result) => result,
            SearchOutcome::Unsuccessful => {
                return Err(ApiError::Request {
                    status: None,
                    message: messages::SEARCH_UNSUCCESSFUL.to_string(),
                });
            }
        };

        self.cache.set(&key, &result);
        Ok(result)
    }

    /// POST a JSON body to `{base_url}/{endpoint}` and return the 2xx body.
    async fn post<B: serde::Serialize>(
        &self,
        endpoint: &str,
        request: &B,
        fallback_message: &str,
    ) -> Result<String, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let body = serde_json::to_string(request)
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

        let resp = self.transport.post_json(&url, &body).await.inspect_err(|e| {
            console::error(&format!("{}: {}", endpoint, e));
        })?;

        if !resp.is_success() {
            let message =
                error_detail(&resp.body).unwrap_or_else(|| fallback_message.to_string());
            console::warn(&format!("{}: HTTP {}: {}", endpoint, resp.status, message));
            return Err(ApiError::Request {
                status: Some(resp.status),
                message,
            });
        }

        Ok(resp.body)
    }
}

/// Error body shape used by the backend (`{"detail": ...}`).
#[derive(Deserialize)]
struct ErrorBody {
    detail: Value,
}

/// Human-readable message from an error body, if there is one.
///
/// `detail` is usually a string; request validation failures send a list
/// of `{"msg": ...}` objects instead, whose messages are joined.
fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.detail {
        Value::String(s) => s,
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    let message = message.trim();
    (!message.is_empty()).then(|| message.to_string())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::config::cache::TTL_MILLIS;
    use crate::core::clock::ManualClock;
    use crate::core::error::FetchError;
    use crate::utils::fetch::HttpResponse;

    /// Transport that replays canned responses and records every request.
    #[derive(Clone, Default)]
    struct ScriptedTransport {
        responses: Rc<RefCell<VecDeque<Result<HttpResponse, FetchError>>>>,
        requests: Rc<RefCell<Vec<(String, Value)>>>,
    }

    impl ScriptedTransport {
        fn reply(&self, status: u16, body: &str) -> &Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        fn fail(&self, err: FetchError) -> &Self {
            self.responses.borrow_mut().push_back(Err(err));
            self
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }

        fn last_request(&self) -> (String, Value) {
            self.requests.borrow().last().cloned().expect("no request made")
        }
    }

    impl HttpTransport for ScriptedTransport {
        async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, FetchError> {
            let json = serde_json::from_str(body).expect("request body is JSON");
            self.requests.borrow_mut().push((url.to_string(), json));
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected request")
        }
    }

    struct Fixture {
        transport: ScriptedTransport,
        clock: ManualClock,
        client: ApiClient<ScriptedTransport>,
    }

    fn fixture() -> Fixture {
        let transport = ScriptedTransport::default();
        let clock = ManualClock::starting_at(1_700_000_000_000);
        let cache = SessionCache::new(Rc::new(MemoryStorage::new()), Rc::new(clock.clone()));
        let identity = IdentityHolder::new(Rc::new(MemoryStorage::new()));
        let client = ApiClient::new(transport.clone(), "http://api.test/", cache, identity);
        Fixture {
            transport,
            clock,
            client,
        }
    }

    const DINNER: &str = r#"{
        "vibe_analysis": "You want people around your table.",
        "products": [
            {"name": "tablecloth", "reason": "instant occasion", "category": "home"},
            {"name": "serving board", "reason": "easy appetizers", "category": "kitchen"}
        ],
        "user_id": "u-123",
        "mode": "ai"
    }"#;

    const NO_ID: &str = r#"{"vibe_analysis": "ok", "products": []}"#;

    fn listings(term: &str) -> String {
        serde_json::json!({
            "success": true,
            "search_term": term,
            "total_results": 1,
            "products": [{
                "title": format!("{} deluxe", term),
                "price": 19.99,
                "currency": "USD",
                "url": "https://shop.example/item",
                "image": "https://shop.example/item.jpg",
                "platform": "eBay"
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_recommend_posts_goal_to_endpoint() {
        let f = fixture();
        f.transport.reply(200, NO_ID);

        f.client.fetch_recommendations("  cook more  ", None).await.unwrap();

        let (url, body) = f.transport.last_request();
        assert_eq!(url, "http://api.test/recommend");
        assert_eq!(body, serde_json::json!({"vibe": "cook more"}));
    }

    #[tokio::test]
    async fn test_recommend_repeat_served_from_cache() {
        let f = fixture();
        f.transport.reply(200, NO_ID);

        let first = f.client.fetch_recommendations("cook more", None).await.unwrap();
        let second = f.client.fetch_recommendations("cook more", None).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(f.transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_fresh_request() {
        let f = fixture();
        f.transport.reply(200, NO_ID).reply(200, NO_ID);

        f.client.fetch_recommendations("cook more", None).await.unwrap();
        f.clock.advance(TTL_MILLIS + 1);
        f.client.fetch_recommendations("cook more", None).await.unwrap();

        assert_eq!(f.transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_user_id_adopted_and_sent_next_time() {
        let f = fixture();
        f.transport.reply(200, DINNER).reply(200, NO_ID);

        f.client.fetch_recommendations("host dinner parties", None).await.unwrap();
        assert_eq!(f.client.identity().get_id().as_deref(), Some("u-123"));

        f.client
            .fetch_recommendations("learn to garden", Some("low budget"))
            .await
            .unwrap();

        let (_, body) = f.transport.last_request();
        assert_eq!(
            body,
            serde_json::json!({
                "vibe": "learn to garden",
                "user_id": "u-123",
                "user_preference": "low budget"
            })
        );
    }

    #[tokio::test]
    async fn test_new_identity_changes_cache_key() {
        let f = fixture();
        f.transport.reply(200, DINNER).reply(200, DINNER);

        // First call has no id and caches under the anonymous key; the
        // adopted id makes the repeat a different logical request.
        f.client.fetch_recommendations("host dinner parties", None).await.unwrap();
        f.client.fetch_recommendations("host dinner parties", None).await.unwrap();
        f.client.fetch_recommendations("host dinner parties", None).await.unwrap();

        assert_eq!(f.transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_error_detail_becomes_message() {
        let f = fixture();
        f.transport.reply(500, r#"{"detail": "X"}"#);

        let err = f.client.fetch_recommendations("cook more", None).await.unwrap_err();

        assert_eq!(err.to_string(), "X");
        assert_eq!(
            err,
            ApiError::Request {
                status: Some(500),
                message: "X".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unparseable_error_body_uses_fallback() {
        let f = fixture();
        f.transport
            .reply(502, "<html>Bad Gateway</html>")
            .reply(404, "not json either");

        let err = f.client.fetch_recommendations("cook more", None).await.unwrap_err();
        assert_eq!(err.to_string(), messages::RECOMMEND_FAILED);

        let err = f.client.search_products("lamp", None).await.unwrap_err();
        assert_eq!(err.to_string(), messages::SEARCH_FAILED);
    }

    #[tokio::test]
    async fn test_validation_error_list_is_joined() {
        let f = fixture();
        f.transport.reply(
            422,
            r#"{"detail": [{"msg": "field required"}, {"msg": "too long"}]}"#,
        );

        let err = f.client.search_products("lamp", None).await.unwrap_err();
        assert_eq!(err.to_string(), "field required; too long");
    }

    #[tokio::test]
    async fn test_failed_request_is_not_cached() {
        let f = fixture();
        f.transport
            .reply(500, r#"{"detail": "down"}"#)
            .reply(200, NO_ID);

        assert!(f.client.fetch_recommendations("cook more", None).await.is_err());
        assert!(f.client.fetch_recommendations("cook more", None).await.is_ok());
        assert_eq!(f.transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_network_failure_surfaces_as_network_error() {
        let f = fixture();
        f.transport
            .fail(FetchError::NetworkError("Failed to fetch".to_string()));

        let err = f.client.fetch_recommendations("cook more", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_distinct_error() {
        let f = fixture();
        f.transport.reply(200, r#"{"products": "lamp, rug, candles"}"#);

        let err = f.client.fetch_recommendations("cook more", None).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
        assert_eq!(f.client.identity().get_id(), None);
    }

    #[tokio::test]
    async fn test_blank_goal_rejected_without_request() {
        let f = fixture();

        let err = f.client.fetch_recommendations("   ", None).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert_eq!(f.transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_default_max_results() {
        let f = fixture();
        f.transport.reply(200, &listings("lamp"));

        f.client.search_products("lamp", None).await.unwrap();

        let (url, body) = f.transport.last_request();
        assert_eq!(url, "http://api.test/search-products");
        assert_eq!(
            body,
            serde_json::json!({"product_name": "lamp", "max_results": 10})
        );
    }

    #[tokio::test]
    async fn test_search_caches_per_max_results() {
        let f = fixture();
        f.transport
            .reply(200, &listings("lamp"))
            .reply(200, &listings("lamp"));

        f.client.search_products("lamp", Some(5)).await.unwrap();
        f.client.search_products("lamp", Some(10)).await.unwrap();
        f.client.search_products("lamp", Some(5)).await.unwrap();
        f.client.search_products("lamp", Some(10)).await.unwrap();

        assert_eq!(f.transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_search_never_sends_identity() {
        let f = fixture();
        f.client.identity().set_id("u-9");
        f.transport.reply(200, &listings("lamp"));

        f.client.search_products("lamp", Some(3)).await.unwrap();

        let (_, body) = f.transport.last_request();
        assert!(body.get("user_id").is_none());
    }

    #[tokio::test]
    async fn test_unsuccessful_search_is_error_and_not_cached() {
        let f = fixture();
        f.transport
            .reply(
                200,
                r#"{"success": false, "search_term": "lamp", "total_results": 0, "products": []}"#,
            )
            .reply(200, &listings("lamp"));

        let err = f.client.search_products("lamp", None).await.unwrap_err();
        assert_eq!(err.to_string(), messages::SEARCH_UNSUCCESSFUL);

        assert!(f.client.search_products("lamp", None).await.is_ok());
        assert_eq!(f.transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_dinner_party_flow() {
        let f = fixture();
        f.transport
            .reply(200, DINNER)
            .reply(200, &listings("tablecloth"));

        let recs = f
            .client
            .fetch_recommendations("host dinner parties", None)
            .await
            .unwrap();
        assert_eq!(f.transport.calls(), 1);

        let first = &recs.items[0].name;
        assert_eq!(first, "tablecloth");

        let shop = f.client.search_products(first, Some(6)).await.unwrap();
        assert_eq!(shop.items[0].title, "tablecloth deluxe");
        assert_eq!(f.transport.calls(), 2);

        // Picking the same product again within the TTL stays local.
        f.clock.advance(60 * 60 * 1000);
        let again = f.client.search_products(first, Some(6)).await.unwrap();
        assert_eq!(again, shop);
        assert_eq!(f.transport.calls(), 2);
    }

    #[test]
    fn test_error_detail_shapes() {
        assert_eq!(error_detail(r#"{"detail": "  "}"#), None);
        assert_eq!(error_detail(r#"{"detail": 42}"#), None);
        assert_eq!(error_detail(r#"{"message": "x"}"#), None);
        assert_eq!(error_detail(r#"{"detail": "boom"}"#).as_deref(), Some("boom"));
    }
}
