use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_loader::GraphQLLoader;
use libgraphql_loader::LoaderOptions;
use libgraphql_loader::host::FsImportHost;
use libgraphql_loader::output::LoaderOutput;
use libgraphql_loader::output::OutputMode;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct BundleCmd {
    #[arg(
        help="Print the files each bundle depends on (imports and schema) to \
             stderr.",
        long,
    )]
    emit_deps: bool,

    #[arg(
        help="Path to a GraphQL file, or a directory whose GraphQL files \
             should each be bundled.",
        name="FILE_OR_DIR_PATH",
        required=true,
    )]
    file_or_dir_path: PathBuf,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="JSON file of loader options (`schema`, `validate`, `output`, \
             `removeUnusedFragments`). Flags override its values.",
        long,
    )]
    options: Option<PathBuf>,

    #[arg(
        help="Print the bundle as GraphQL text (`string`) or as a JSON AST \
             (`document`).",
        long,
    )]
    output: Option<OutputMode>,

    #[arg(
        help="Drop fragments that no operation uses.",
        long,
    )]
    remove_unused_fragments: bool,

    #[arg(
        help="File name of the JSON introspection schema, searched for in \
             each bundled file's directory and then its ancestors.",
        long,
    )]
    schema: Option<String>,

    #[arg(
        help="Validate each bundle against the schema. Problems are reported \
             on stderr but do not fail the command.",
        long,
    )]
    validate: bool,
}

#[inherent::inherent]
impl RunnableCommand for BundleCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let options = match self.loader_options() {
            Ok(options) => options,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let file_paths = match self.find_file_paths() {
            Ok(file_paths) => file_paths,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Found {} GraphQL files to be bundled.", file_paths.len());

        let is_dir_mode = self.file_or_dir_path.is_dir();
        let mut stdout_chunks = vec![];
        let mut stderr_lines = vec![];
        for file_path in &file_paths {
            let bundle = match bundle_file(file_path, &options).await {
                Ok(bundle) => bundle,
                Err(err) => return CommandResult::stderr(format_args!(
                    "{} {err:#}",
                    output_utils::RED_X,
                )),
            };

            if is_dir_mode {
                stdout_chunks.push(format!("# {}\n{}", file_path.display(), bundle.payload));
            } else {
                stdout_chunks.push(bundle.payload);
            }

            for diagnostic in &bundle.diagnostics {
                stderr_lines.push(format!(
                    "{} {}: {diagnostic}",
                    output_utils::RED_X,
                    file_path.display(),
                ));
            }
            if options.validate && bundle.diagnostics.is_empty() {
                stderr_lines.push(format!(
                    "{} {}: no validation errors",
                    output_utils::GREEN_CHECK,
                    file_path.display(),
                ));
            }
            if self.emit_deps {
                for dependency in &bundle.dependencies {
                    stderr_lines.push(format!(
                        "{} depends on {}",
                        file_path.display(),
                        dependency.display(),
                    ));
                }
            }
        }

        let stderr = if stderr_lines.is_empty() {
            None
        } else {
            Some(stderr_lines.join("\n"))
        };
        CommandResult::success(stdout_chunks.join("\n"), stderr)
    }
}

impl BundleCmd {
    /// The `--options` file, if any, with flag overrides applied.
    fn loader_options(&self) -> anyhow::Result<LoaderOptions> {
        let mut options = match &self.options {
            Some(options_path) => {
                let json = std::fs::read_to_string(options_path).with_context(|| {
                    format!("Failed to read options file {options_path:?}")
                })?;
                LoaderOptions::from_json_str(&json)
                    .with_context(|| format!("Invalid options file {options_path:?}"))?
            },
            None => LoaderOptions::default(),
        };

        if let Some(output) = self.output {
            options.output = output;
        }
        if let Some(schema) = &self.schema {
            options.schema = Some(schema.to_string());
        }
        options.remove_unused_fragments |= self.remove_unused_fragments;
        options.validate |= self.validate;
        log::debug!("Bundling with {options:?}.");
        Ok(options)
    }

    /// The file argument itself, or every GraphQL file found under the
    /// directory argument in path order.
    fn find_file_paths(&self) -> anyhow::Result<Vec<PathBuf>> {
        let path = self.file_or_dir_path.as_path();
        if !path.is_dir() {
            return Ok(vec![path.to_path_buf()]);
        }

        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        let mut file_paths = vec![];
        for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("Failed to scan files under {path:?}")
            })?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            match entry_path.extension().and_then(|ext| ext.to_str()) {
                Some(ext) if graphql_file_exts.contains(ext) => {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                },
                _ => log::trace!("Skipping non-GraphQL file: {entry_path:#?}."),
            }
        }
        Ok(file_paths)
    }
}

struct Bundle {
    dependencies: Vec<PathBuf>,
    diagnostics: Vec<libgraphql_loader::validation::ValidationError>,
    payload: String,
}

async fn bundle_file(file_path: &Path, options: &LoaderOptions) -> anyhow::Result<Bundle> {
    let source = tokio::fs::read_to_string(file_path)
        .await
        .with_context(|| format!("Failed to read {file_path:?}"))?;

    let loader = GraphQLLoader::new(FsImportHost::new(), options.clone());
    let result = loader
        .load(&source, file_path)
        .await
        .with_context(|| format!("Failed to bundle {file_path:?}"))?;

    let payload = match &result.output {
        LoaderOutput::Text(text) => text.to_string(),
        LoaderOutput::Document(document) => serde_json::to_string_pretty(document)?,
    };
    Ok(Bundle {
        dependencies: loader.host().dependencies(),
        diagnostics: result.diagnostics,
        payload,
    })
}
