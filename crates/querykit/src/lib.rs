//! # Querykit Architecture
//!
//! Querykit is the **list-query layer** of a data-backed service: it turns a
//! client's list request into one page of entities. It knows nothing about
//! HTTP or databases; a transport layer hands it a request object and a
//! repository, and gets back either a page or a typed error that maps onto a
//! status code.
//!
//! ## Request Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Request (validation/)                                      │
//! │  - PaginationFilter / ExtendedAttributePaginationFilter     │
//! │  - Validators collect every field error at once             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Specification (specification/)                            │
//! │  - Composable predicate, AND-only, empty matches all        │
//! │  - Date ranges, extended-attribute criteria                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract Repository trait                                │
//! │  - InMemoryRepository (bundled, used by the CLI and tests)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page (pagination/)                                         │
//! │  - Keyword search, ordering with id tie-break, page cut     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`query`] wires these steps together.
//!
//! ## Extended Attributes
//!
//! Entities can carry typed runtime-defined fields, see [`attributes`]. The
//! value type is an enum, so an attribute's type discriminator can never
//! disagree with its value in memory; storage rows are checked on the way in.
//!
//! ## Module Overview
//!
//! - [`entity`]: `Entity`, `Timestamped` and `Queryable` traits
//! - [`attributes`]: attribute values, entities, storage rows and criteria
//! - [`specification`]: predicates and the builder
//! - [`pagination`]: filter, ordering, search and `PaginatedResult`
//! - [`validation`]: validators and key rules
//! - [`store`]: repository trait and in-memory implementation
//! - [`query`]: validate, select, search, order, page
//! - [`docs_cache`]: generate-once cache for API documents
//! - [`config`]: limits, loaded with `confique`
//! - [`error`]: `QueryError` and status mapping

pub mod attributes;
pub mod config;
pub mod docs_cache;
pub mod entity;
pub mod error;
pub mod pagination;
pub mod query;
pub mod specification;
pub mod store;
pub mod validation;

pub use config::QueryConfig;
pub use error::{QueryError, Result};
