use crate::ast;
use crate::host::ImportHost;
use crate::import::ImportDirective;
use crate::import::ImportError;
use crate::import::scan_import_directives;
use crate::node::AstNode;
use crate::node::lower_document;
use futures::future::FutureExt;
use futures::future::LocalBoxFuture;
use futures::future::try_join_all;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ImportError>;

/// Recursively expands `#import` directives into one merged `Document`
/// node.
///
/// The merged document holds the entry file's own definitions first,
/// followed by each import's (recursively expanded) definitions in
/// directive order. Sibling imports of a file are fetched concurrently and
/// joined before merging; if any of them fails, the others are dropped and
/// the first error is returned.
///
/// Every file on the current import chain is remembered, so a file that
/// (transitively) imports itself fails with [`ImportError::CyclicImport`].
/// The same file reached through two different chains is simply read twice;
/// fragment deduplication discards the extra copy later.
#[derive(Debug)]
pub struct ImportResolver<'host, H: ImportHost> {
    host: &'host H,
}
impl<'host, H: ImportHost> ImportResolver<'host, H> {
    pub fn new(host: &'host H) -> Self {
        Self { host }
    }

    /// Expands `source`, resolving its imports against `base_dir`. Use
    /// [`ImportResolver::resolve_file`] when the source has a known path.
    pub async fn resolve(&self, source: &str, base_dir: &Path) -> Result<AstNode> {
        self.expand(source.to_string(), base_dir.to_path_buf(), None, vec![])
            .await
    }

    /// Expands the contents of the file at `file_path`, resolving its
    /// imports against the file's directory. The file itself counts as the
    /// start of the import chain.
    pub async fn resolve_file(
        &self,
        source: &str,
        file_path: &Path,
    ) -> Result<AstNode> {
        let base_dir = file_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let entry_path = self.host.entry_path(file_path).await;

        self.expand(
            source.to_string(),
            base_dir,
            Some(file_path.to_path_buf()),
            vec![entry_path],
        ).await
    }

    fn expand<'a>(
        &'a self,
        source: String,
        base_dir: PathBuf,
        file: Option<PathBuf>,
        chain: Vec<PathBuf>,
    ) -> LocalBoxFuture<'a, Result<AstNode>> {
        async move {
            // Check every directive before any I/O starts.
            let directives = scan_import_directives(&source, file.as_deref())?;
            let parsed = ast::parse(&source).map_err(|err| ImportError::Parse {
                file: file.clone(),
                message: err.to_string(),
            })?;
            let mut document = lower_document(&parsed, file.as_deref());
            if directives.is_empty() {
                return Ok(document);
            }

            log::debug!(
                "Resolving {} import(s) of {} relative to {base_dir:?}.",
                directives.len(),
                file.as_deref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "<source>".to_string()),
            );

            let imported = try_join_all(
                directives
                    .iter()
                    .map(|directive| self.expand_import(&base_dir, directive, &chain)),
            ).await?;

            if let Some(definitions) = document.list_mut("definitions") {
                for imported_doc in imported {
                    definitions.extend(imported_doc.into_list("definitions"));
                }
            }
            Ok(document)
        }.boxed_local()
    }

    async fn expand_import(
        &self,
        base_dir: &Path,
        directive: &ImportDirective,
        chain: &[PathBuf],
    ) -> Result<AstNode> {
        let path = self.host
            .resolve(base_dir, &directive.import_spec)
            .await
            .map_err(|err| ImportError::UnresolvedImport {
                import_spec: directive.import_spec.to_string(),
                base_dir: base_dir.to_path_buf(),
                message: err.to_string(),
            })?;

        if chain.contains(&path) {
            let mut cycle = chain.to_vec();
            cycle.push(path);
            return Err(ImportError::CyclicImport { cycle });
        }
        self.host.record_dependency(&path);

        let bytes = self.host.read(&path).await.map_err(|err| {
            ImportError::ImportRead {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        let source = String::from_utf8(bytes).map_err(|err| {
            ImportError::ImportDecode {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        log::trace!(
            "Expanding {path:?} (imported on line {}).",
            directive.line,
        );

        let import_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let mut import_chain = chain.to_vec();
        import_chain.push(path.to_path_buf());
        self.expand(source, import_dir, Some(path), import_chain).await
    }
}
