//! Tern Formatter
//!
//! Layout policies for array/tuple literals and braced bodies, on top of the
//! `tern_doc` document renderer.
//!
//! # Architecture
//!
//! Formatting is two passes over immutable input:
//!
//! 1. **Print**: [`Printer`] walks the tree and builds one document,
//!    delegating arrays and tuples to [`sequence`] and braced bodies to
//!    [`block`]. Source line metadata decides where blank lines, forced
//!    breaks, and matrix rows go.
//! 2. **Render**: `tern_doc::render` lays the document out within the
//!    configured width.
//!
//! # Modules
//!
//! - [`config`]: Formatting options
//! - [`printer`]: Tree walker and the [`Driver`] seam
//! - [`sequence`]: Array and tuple literals
//! - [`block`]: Statement blocks, class bodies, program bodies
//! - [`comments`]: Leading, trailing, and dangling comments

pub mod block;
pub mod comments;
pub mod config;
mod error;
pub mod printer;
pub mod sequence;
pub mod statement;

use std::sync::Once;

use rayon::prelude::*;
use tern_doc::Doc;
use tern_ir::Node;

pub use block::{print_block, print_block_body, BlockOwner};
pub use config::{BraceStyle, ClassMemberOrder, FormatConfig, TrailingComma};
pub use error::{ConfigError, FormatError};
pub use printer::{Driver, Printer};
pub use sequence::{print_sequence, SequenceKind};

/// Build the document for `node` without rendering it.
pub fn print_doc(node: &Node, config: &FormatConfig) -> Result<Doc, FormatError> {
    config.validate()?;
    Printer::new(*config).print(node)
}

/// Format a tree (usually a program) to text.
///
/// Output ends with a newline when the tree is a non-empty program.
#[tracing::instrument(level = "debug", skip_all, fields(width = config.print_width))]
pub fn format_program(program: &Node, config: &FormatConfig) -> Result<String, FormatError> {
    let doc = print_doc(program, config)?;
    let output = tern_doc::render(&doc, &config.render_options())?;
    tracing::debug!(bytes = output.len(), "formatted");
    Ok(output)
}

/// Format independent trees in parallel, preserving input order.
pub fn format_programs(
    programs: &[Node],
    config: &FormatConfig,
) -> Vec<Result<String, FormatError>> {
    programs
        .par_iter()
        .map(|program| format_program(program, config))
        .collect()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Uses `RUST_LOG` for filtering (e.g. `RUST_LOG=tern_fmt=trace`). Nothing
/// is installed when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
