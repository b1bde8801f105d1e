//! Word-set generation
//!
//! Request/result data model, player naming and the sampling engine.

pub mod engine;
pub mod naming;
pub mod request;
pub mod result;
pub mod session;

pub use engine::{candidate_pool, WordGenerator};
pub use naming::resolve_player_name;
pub use request::{GenerationRequest, GroupSpec, PlayerSpec, SchemaVersion, CURRENT_SCHEMA_VERSION};
pub use result::{GeneratedWord, GenerationResult, PlayerResult};
pub use session::Session;
