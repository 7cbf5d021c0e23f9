//! Recipe search, ranking and session core for recipe browsing front ends.
//!
//! The display layer fetches recipes, keeps the search box text and the active
//! filter tag, and asks this crate which cards to draw, in what order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  record.rs  │────▶│  search.rs   │────▶│   card.rs   │────▶│  (display)  │
//! │(load_records│     │ (rank,Ranker)│     │  (Listing,  │     │  CLI / UI   │
//! │  validate)  │     │              │     │ RecipeCard) │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                 ┌─────────────────────┐
//!                 │ scoring/ contracts  │
//!                 │ (comparators, debug │
//!                 │  output invariants) │
//!                 └─────────────────────┘
//!
//! session.rs: Session { login, logout, current_user, update_profile }
//! ```
//!
//! # Usage
//!
//! ```
//! use recipe_ranker::{load_records, rank, FilterMode, LinkStyle, Listing};
//!
//! let json = r#"[
//!     {"id": "1", "title": "Tomato Soup", "publisher": "Chef A", "social_rank": 80},
//!     {"id": "2", "title": "Bread", "publisher": "Baker Tomato", "social_rank": 95},
//!     {"id": "3", "title": "Pie", "publisher": "Chef B", "social_rank": 99}
//! ]"#;
//! let records = load_records(json).unwrap();
//!
//! let ranked = rank(&records, "tomato", FilterMode::Popular);
//! let listing = Listing::from_ranked(&ranked, LinkStyle::Static);
//! assert_eq!(listing.cards()[0].title, "Bread");
//! ```

// Module declarations
pub mod card;
pub mod config;
pub mod contracts;
mod error;
mod record;
pub mod scoring;
mod search;
pub mod session;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use card::{round_half_up, LinkStyle, Listing, RecipeCard, NO_RESULTS_MESSAGE};
pub use config::RankerConfig;
pub use error::{RankError, SessionError};
pub use record::{find_by_recipe_id, load_records};
pub use scoring::ranking::{
    compare_popularity, merge_sort_by, trending_cmp, trending_cmp_weighted,
};
pub use scoring::{TrendingWeights, POPULARITY_WEIGHT, RECENCY_WEIGHT, RESULT_LIMIT};
pub use search::{matches_query, rank, Ranker};
pub use session::{Authenticator, Credentials, ProfileUpdate, Session, User};
pub use types::{FilterMode, Recipe};
pub use utils::fold_case;
