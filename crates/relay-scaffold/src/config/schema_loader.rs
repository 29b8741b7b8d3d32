use crate::config::ConfigResolver;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use std::path::PathBuf;
use thiserror::Error;

/// The collaborator that hands a [`Schema`] to each command invocation.
///
/// `Ok(None)` means no schema is configured; callers degrade gracefully.
/// `Err(_)` means a configured schema exists but could not be loaded.
#[allow(async_fn_in_trait)]
pub trait SchemaLoader {
    async fn load_schema(&self) -> Result<Option<Schema>, SchemaLoadError>;
}

/// Loads the schema declared by the `relay` config found in a workspace
/// root.
#[derive(Debug)]
pub struct WorkspaceSchemaLoader {
    resolver: ConfigResolver,
    workspace_root: PathBuf,
}
impl WorkspaceSchemaLoader {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self::with_resolver(workspace_root, ConfigResolver::relay())
    }

    pub fn with_resolver(
        workspace_root: impl Into<PathBuf>,
        resolver: ConfigResolver,
    ) -> Self {
        Self {
            resolver,
            workspace_root: workspace_root.into(),
        }
    }
}
impl SchemaLoader for WorkspaceSchemaLoader {
    async fn load_schema(&self) -> Result<Option<Schema>, SchemaLoadError> {
        let Some(config) = self.resolver.resolve(self.workspace_root.as_path()).await else {
            log::debug!(
                "No usable config found in {:?}; continuing without a schema.",
                self.workspace_root,
            );
            return Ok(None);
        };

        Ok(Some(config.load_schema().await?))
    }
}

#[derive(Debug, Error)]
pub enum SchemaLoadError {
    #[error(transparent)]
    Build(#[from] SchemaBuildError),

    #[error("Schema pointer `{pointer}` did not match any files")]
    NoSchemaFiles {
        pointer: String,
    },

    #[error("Failed to read schema file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Schema pointer `{pointer}` is a URL; only local SDL files are supported"
    )]
    UnsupportedPointer {
        pointer: String,
    },

    #[error("Failed to scan schema directory {path:?}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}
