use crate::LoadError;
use crate::LoaderOptions;
use crate::LoaderResult;
use crate::host::ImportHost;
use crate::import::ImportResolver;
use crate::node::AstNode;
use crate::node::raise_document;
use crate::output::LoaderOutput;
use crate::schema::locate_schema_file;
use crate::transform::dedupe_fragments;
use crate::transform::prune_unused_fragments;
use crate::transform::strip_locations;
use crate::validation::IntrospectionValidationEngine;
use crate::validation::ValidationEngine;
use crate::validation::ValidationError;
use crate::validation::validate_document;
use std::path::Path;

type Result<T> = std::result::Result<T, LoadError>;

/// Bundles one GraphQL document and everything it `#import`s.
///
/// ```no_run
/// # async fn bundle() -> Result<(), libgraphql_loader::LoadError> {
/// use libgraphql_loader::GraphQLLoader;
/// use libgraphql_loader::LoaderOptions;
/// use libgraphql_loader::host::FsImportHost;
/// use std::path::Path;
///
/// let loader = GraphQLLoader::new(FsImportHost::new(), LoaderOptions::default());
/// let result = loader
///     .load("#import \"./user.graphql\"\nquery Me { me { ...User } }", Path::new("src/me.graphql"))
///     .await?;
/// println!("{}", result.output.as_text().unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GraphQLLoader<H: ImportHost, E: ValidationEngine = IntrospectionValidationEngine> {
    engine: E,
    host: H,
    options: LoaderOptions,
}
impl<H: ImportHost> GraphQLLoader<H> {
    pub fn new(host: H, options: LoaderOptions) -> Self {
        Self::with_engine(host, IntrospectionValidationEngine, options)
    }
}
impl<H: ImportHost, E: ValidationEngine> GraphQLLoader<H, E> {
    pub fn with_engine(host: H, engine: E, options: LoaderOptions) -> Self {
        Self {
            engine,
            host,
            options,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Runs the whole pipeline over `source`, the contents of the file at
    /// `resource_path`. Imports resolve relative to that file's directory,
    /// which is also where the schema search starts.
    pub async fn load(&self, source: &str, resource_path: &Path) -> Result<LoaderResult> {
        let schema_file = match (self.options.validate, &self.options.schema) {
            (false, _) => None,
            (true, Some(schema_file)) => Some(schema_file.as_str()),
            (true, None) => return Err(LoadError::ValidateWithoutSchema),
        };

        let mut document = ImportResolver::new(&self.host)
            .resolve_file(source, resource_path)
            .await?;

        let duplicates = dedupe_fragments(&mut document);
        strip_locations(&mut document);
        let pruned = if self.options.remove_unused_fragments {
            prune_unused_fragments(&mut document)
        } else {
            0
        };
        log::debug!(
            "Bundled {resource_path:?}: dropped {duplicates} duplicate and {pruned} \
            unused fragment(s).",
        );

        let diagnostics = match schema_file {
            Some(schema_file) => {
                let resource_dir = resource_path
                    .parent()
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                self.validate(&document, resource_dir, schema_file).await?
            },
            None => vec![],
        };

        Ok(LoaderResult {
            output: LoaderOutput::render(document, self.options.output)?,
            diagnostics,
        })
    }

    async fn validate(
        &self,
        document: &AstNode,
        resource_dir: &Path,
        schema_file: &str,
    ) -> Result<Vec<ValidationError>> {
        let schema_path = locate_schema_file(resource_dir, schema_file)?;
        self.host.record_dependency(&schema_path);

        let bytes = self.host.read(&schema_path).await.map_err(|err| {
            LoadError::SchemaRead {
                path: schema_path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        let json = String::from_utf8(bytes).map_err(|err| LoadError::SchemaRead {
            path: schema_path.to_path_buf(),
            message: err.to_string(),
        })?;
        let schema = self.engine.build_schema(&json)?;

        Ok(validate_document(&self.engine, &schema, &raise_document(document)?))
    }
}
