//! The `block!` macro.
//!
//! ```
//! use blockfold::block;
//! use blockfold::strings::Joined;
//!
//! let excited = true;
//! let text = block!(Joined::new(" ");
//!     "Hello",
//!     "World",
//!     if excited => "!!!",
//!     if !excited => "?", else => ".",
//! );
//! assert_eq!(text, "Hello World !!! .");
//! ```
//!
//! Statements are separated by commas and expand, in order, to
//! [`Block::add`](crate::builder::Block::add),
//! [`Block::add_if`](crate::builder::Block::add_if) and
//! [`Block::add_either`](crate::builder::Block::add_either).

/// Fold a comma-separated list of statements with a result builder.
#[macro_export]
macro_rules! block {
    (@stmts $block:ident;) => {
        $block.build()
    };
    (@stmts $block:ident; if $cond:expr => $then:expr, else => $otherwise:expr $(, $($rest:tt)*)?) => {{
        let $block = $block.add_either($cond, || $then, || $otherwise);
        $crate::block!(@stmts $block; $($($rest)*)?)
    }};
    (@stmts $block:ident; if $cond:expr => $then:expr $(, $($rest:tt)*)?) => {{
        let $block = $block.add_if($cond, || $then);
        $crate::block!(@stmts $block; $($($rest)*)?)
    }};
    (@stmts $block:ident; $stmt:expr $(, $($rest:tt)*)?) => {{
        let $block = $block.add($stmt);
        $crate::block!(@stmts $block; $($($rest)*)?)
    }};
    ($builder:expr $(,)?) => {
        $crate::builder::Block::new(&$builder).build()
    };
    ($builder:expr; $($stmts:tt)*) => {{
        let builder = &$builder;
        let block = $crate::builder::Block::new(builder);
        $crate::block!(@stmts block; $($stmts)*)
    }};
}
