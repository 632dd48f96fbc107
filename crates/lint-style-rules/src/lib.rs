//! # lint-style-rules
//!
//! Built-in style rules for lint-style.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | `ERR_COP` | `copyright-header` | Requires the copyright header block |
//! | `ERR_AUT` | `authors-line` | Authors are comma-separated, no trailing period |
//! | `ERR_IMP` | `import-placement` | Imports come before any other content |
//! | `ERR_MOD` | `module-docstring` | Module docstring before the first declaration |
//! | `ERR_LIN` | `line-length` | Lines at most 100 characters |
//! | `ERR_WIN` | `windows-line-ending` | No CRLF line endings |
//! | `ERR_TWS` | `trailing-whitespace` | No trailing spaces or tabs |
//!
//! ## Usage
//!
//! ```ignore
//! use lint_style_core::Linter;
//! use lint_style_rules::configured_rules;
//!
//! let linter = Linter::builder()
//!     .root(&root)
//!     .rules(configured_rules(&config))
//!     .config(config)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod authors_line;
pub mod copyright_header;
pub mod import_placement;
pub mod line_endings;
pub mod line_length;
pub mod module_docstring;
mod presets;
pub mod trailing_whitespace;

pub use authors_line::AuthorsLine;
pub use copyright_header::CopyrightHeader;
pub use import_placement::ImportPlacement;
pub use line_endings::WindowsLineEnding;
pub use line_length::LineLength;
pub use module_docstring::ModuleDocstring;
pub use presets::{all_rules, configured_rules};
pub use trailing_whitespace::TrailingWhitespace;

/// Re-export core types for convenience.
pub use lint_style_core::{Rule, Violation};
