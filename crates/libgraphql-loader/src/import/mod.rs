//! Expansion of `#import "path"` directives into a single merged document.

mod import_directive;
mod import_error;
mod import_resolver;

pub use import_directive::ImportDirective;
pub use import_directive::scan_import_directives;
pub use import_error::ImportError;
pub use import_resolver::ImportResolver;

#[cfg(test)]
mod tests;
