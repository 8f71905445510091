mod graphql_loader;
mod load_error;
mod loader_options;
mod loader_result;

pub use graphql_loader::GraphQLLoader;
pub use load_error::LoadError;
pub use loader_options::LoaderOptions;
pub use loader_options::LoaderOptionsError;
pub use loader_result::LoaderResult;
