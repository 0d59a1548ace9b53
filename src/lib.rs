//! propdoc: component reference pages from annotated TypeScript prop interfaces.
//!
//! Each component file declares its props as interfaces named by suffix
//! (`*CesiumProps`, `*CesiumReadonlyProps`, `*CesiumEvents`, `*Props`).
//! Comment tags on the properties and statements refine the grouping and
//! supply the prose:
//!
//! - `@CesiumProp`, `@CesiumReadonlyProp`, `@CesiumEvent`, `@prop`: move a property to a table
//! - `@hidden`: keep a property out of rendered tables
//! - `@type <text>`: override the displayed type
//! - `@summary`, `@scope`, `@example`, `@example-imports`: component-level fields
//!
//! [`parser::parse_component`] produces a [`model::DeclarationRecord`] that
//! the [`render`] module turns into an MDX page or JSON.

pub mod model;
pub mod parser;
pub mod render;

pub use model::{Bucket, DeclarationRecord, PropertyRecord};
pub use parser::{parse_component, Dialect, Error};

/// Base URL of the Cesium API reference.
pub const DEFAULT_DOCS_URL: &str = "https://cesiumjs.org/Cesium/Build/Documentation/";
