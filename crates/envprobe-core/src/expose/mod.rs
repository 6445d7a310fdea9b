//! Expose rules and the filtered mapping they produce.
//!
//! A rule is a literal key prefix plus a key rewrite. Two stock rules exist,
//! selected by [`ExposeMode`]:
//! - `pod`: keep `POD_*` entries under their original names.
//! - `public`: keep `PUBLIC_*` entries, drop every `PUBLIC_` occurrence from
//!   the name, and lowercase what remains.

pub mod exposed;
pub mod rule;

pub use exposed::{expose, ExposedEnv};
pub use rule::{ExposeMode, ExposeRule, KeyRewrite};
