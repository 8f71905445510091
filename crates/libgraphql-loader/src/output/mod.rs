//! The payload handed back to the host: printed text or the tagged tree.

mod loader_output;
mod output_mode;

pub use loader_output::LoaderOutput;
pub use output_mode::OutputMode;
pub use output_mode::UnknownOutputModeError;

#[cfg(test)]
mod tests;
