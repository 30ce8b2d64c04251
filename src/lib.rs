//! Blockfold - result builders for Rust
//!
//! Folds an ordered block of segment-producing statements into one
//! aggregate value, with conditional inclusion for `if` and `if`/`else`
//! statements. Ships plain string builders, an attributed (styled) string
//! builder, a declarative block document format and renderers.
//!
//! ```
//! use blockfold::attributed::{AttributedStringBuilder, Color, Styled};
//! use blockfold::block;
//!
//! let text = block!(AttributedStringBuilder;
//!     "Hello".foreground_color(Color::Red),
//!     "World".foreground_color(Color::Blue).underline(Color::Blue),
//! );
//! assert_eq!(text.text(), "HelloWorld");
//! ```

pub mod attributed;
pub mod builder;
pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod scanner;
pub mod strings;

pub use builder::{Block, Branch, ResultBuilder};
pub use error::{ComposeError, ComposeResult};
