//! settings-nav - Role-gated settings navigation
//!
//! Catalog → access filter → grouped view. A validated [`Catalog`] holds the
//! settings pages in display order; [`filter`] keeps the pages a caller's
//! [`PermissionSet`] unlocks; [`build_groups`] arranges them under headings.
//!
//! Visibility: a page gated on several service types is shown when any one
//! scope is fully satisfied (every permission listed for it is held). Pages
//! with no requirements are shown to everyone.

mod builtin;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod filter;
pub mod locale;
pub mod types;
pub mod view;

#[cfg(feature = "server")]
pub mod server;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use filter::{filter, is_visible};
pub use locale::{negotiate_language, resolve_language, FALLBACK_LANGUAGE, SUPPORTED_LANGUAGES};
pub use types::{PermissionSet, ServiceType, SettingDescriptor};
pub use view::{build_groups, flatten, navigation, Group};
