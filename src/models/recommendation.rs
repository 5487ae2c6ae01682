//! Recommendation types for `POST /recommend`.

use serde::{Deserialize, Serialize};

use super::schema::{SchemaError, non_blank};

// =============================================================================
// Request
// =============================================================================

/// Body of `POST /recommend`. Absent optionals are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest<'a> {
    pub vibe: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_preference: Option<&'a str>,
}

// =============================================================================
// Response (wire)
// =============================================================================

#[derive(Deserialize)]
struct RecommendResponse {
    vibe_analysis: String,
    products: Vec<ProductWire>,
    #[serde(default, deserialize_with = "non_blank")]
    user_id: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    mode: Option<String>,
}

#[derive(Deserialize)]
struct ProductWire {
    name: String,
    reason: String,
    category: String,
}

// =============================================================================
// Domain
// =============================================================================

/// One AI-suggested product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub reason: String,
    pub category: String,
}

/// AI-derived suggestions for a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Free-text reading of the user's goal.
    pub analysis_text: String,
    /// Suggestions in the order the backend ranked them.
    pub items: Vec<Recommendation>,
    /// Identifier minted by the backend for this user, if any.
    pub user_id: Option<String>,
    /// Backend mode tag (e.g. `"ai"`, `"fallback"`).
    pub mode: Option<String>,
}

impl RecommendationResult {
    /// Parse and shape-check a `/recommend` response body.
    pub fn from_json(body: &str) -> Result<Self, SchemaError> {
        let wire: RecommendResponse = serde_json::from_str(body)?;
        Self::from_wire(wire)
    }

    fn from_wire(wire: RecommendResponse) -> Result<Self, SchemaError> {
        let items = wire
            .products
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                let name = p.name.trim().to_string();
                if name.is_empty() {
                    return Err(SchemaError(format!("product {} has no name", i)));
                }
                Ok(Recommendation {
                    name,
                    reason: p.reason,
                    category: p.category,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            analysis_text: wire.vibe_analysis,
            items,
            user_id: wire.user_id,
            mode: wire.mode,
        })
    }
}
