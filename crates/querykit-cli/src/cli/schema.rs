//! Query-surface document: the parameters, fields and limits a client may use
//! when listing extended attributes.

use std::sync::Arc;

use once_cell::sync::Lazy;
use querykit::attributes::{AttributeType, ExtendedAttribute};
use querykit::docs_cache::{DocumentCache, DocumentKey};
use querykit::entity::Queryable;
use querykit::QueryConfig;
use serde_json::{json, Value};
use uuid::Uuid;

pub const DOCUMENT_NAME: &str = "extended-attributes.v1";

static DOCUMENTS: Lazy<DocumentCache<Value>> = Lazy::new(DocumentCache::new);

/// The document for `host` and `base_path`, generated on first request.
pub fn document(host: &str, base_path: &str, config: &QueryConfig) -> Arc<Value> {
    let key = DocumentKey::new(DOCUMENT_NAME, host, base_path);
    DOCUMENTS.get_or_generate(&key, || generate(&key, config))
}

fn generate(key: &DocumentKey, config: &QueryConfig) -> Value {
    type Attr = ExtendedAttribute<Uuid>;

    let base = key.base_path.trim_end_matches('/');
    let types: Vec<&str> = AttributeType::ALL.iter().map(|t| t.as_str()).collect();
    let list_path = format!("{}/extended-attributes", base);

    json!({
        "document": key.document_name,
        "server": format!("https://{}{}", key.host, base),
        "paths": {
            (list_path): {
                "get": {
                    "parameters": {
                        "entity_id": {"type": "uuid", "required": true},
                        "type": {"enum": types},
                        "external_id": {"type": "string", "max_length": config.max_key_length},
                        "group": {"type": "string", "max_length": config.max_key_length},
                        "page_number": {"type": "integer", "minimum": 1, "default": 1},
                        "page_size": {
                            "type": "integer",
                            "minimum": 1,
                            "maximum": config.max_page_size,
                            "default": config.default_page_size,
                        },
                        "order_by": {"type": "array", "items": "<field> [asc|desc]"},
                        "keyword": {"type": "string", "max_length": config.max_keyword_length},
                        "search_fields": {"type": "array", "items": "<field>"},
                    },
                    "fields": Attr::FIELDS,
                    "default_search_fields": Attr::DEFAULT_SEARCH_FIELDS,
                    "responses": {
                        "200": "PaginatedResult",
                        "400": "field errors",
                    },
                }
            }
        }
    })
}
