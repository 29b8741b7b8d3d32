use crate::config::ProjectConfig;
use crate::config::SchemaExtension;
use crate::config::SchemaLoadError;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, SchemaLoadError>;

const SDL_FILE_EXTS: [&str; 2] = ["graphql", "graphqls"];

/// A resolved project configuration: the config file it came from, the
/// selected project, and the schema extensions registered for it.
#[derive(Clone, Debug)]
pub struct GraphQLConfig {
    pub(crate) config_path: PathBuf,
    pub(crate) extensions: Vec<Arc<dyn SchemaExtension>>,
    pub(crate) project: ProjectConfig,
}
impl GraphQLConfig {
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// The directory schema pointers are resolved against.
    pub fn dir(&self) -> &Path {
        self.config_path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn extension_names(&self) -> Vec<&str> {
        self.extensions.iter().map(|ext| ext.name()).collect()
    }

    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }

    /// Expands the project's schema pointers into the SDL files they name.
    pub fn schema_files(&self) -> Result<Vec<PathBuf>> {
        let pointers = self.project.schema.as_ref()
            .map(|pointer| pointer.to_vec())
            .unwrap_or_default();

        let mut file_paths = vec![];
        for pointer in pointers {
            let matched = expand_pointer(self.dir(), pointer.as_str())?;
            if matched.is_empty() {
                return Err(SchemaLoadError::NoSchemaFiles { pointer });
            }
            file_paths.extend(matched);
        }
        Ok(file_paths)
    }

    /// Reads every schema file, applies the registered extensions and
    /// builds the [`Schema`].
    pub async fn load_schema(&self) -> Result<Schema> {
        let file_paths = self.schema_files()?;
        log::debug!(
            "Loading schema from {} file(s) for {:?}.",
            file_paths.len(),
            self.config_path,
        );

        let mut builder = SchemaBuilder::new();
        for file_path in file_paths {
            let content = tokio::fs::read_to_string(file_path.as_path()).await
                .map_err(|source| SchemaLoadError::Read {
                    path: file_path.to_owned(),
                    source,
                })?;
            builder = builder.load_str(Some(file_path), content.as_str())?;
        }

        for ext in &self.extensions {
            log::trace!("Applying schema extension `{}`.", ext.name());
            builder = ext.extend_schema(builder)?;
        }

        Ok(builder.build()?)
    }
}

fn expand_pointer(base_dir: &Path, pointer: &str) -> Result<Vec<PathBuf>> {
    if pointer.starts_with("http://") || pointer.starts_with("https://") {
        return Err(SchemaLoadError::UnsupportedPointer {
            pointer: pointer.to_string(),
        });
    }

    if !pointer.contains('*') {
        let path = base_dir.join(pointer);
        return if path.is_dir() {
            walk_sdl_files(path.as_path(), None)
        } else if path.is_file() {
            Ok(vec![path])
        } else {
            Ok(vec![])
        };
    }

    // Globs are approximated: walk everything below the last wildcard-free
    // directory and filter on the pattern's file extension.
    let pattern = Path::new(pointer);
    let walk_root: PathBuf = pattern.components()
        .take_while(|component| !component.as_os_str().to_string_lossy().contains('*'))
        .collect();
    let ext_filter = pattern.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .filter(|ext| !ext.contains('*') && !ext.contains('{'));

    walk_sdl_files(base_dir.join(walk_root).as_path(), ext_filter.as_deref())
}

fn walk_sdl_files(dir: &Path, ext_filter: Option<&str>) -> Result<Vec<PathBuf>> {
    let mut file_paths = vec![];
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| SchemaLoadError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().map(|ext| ext.to_string_lossy());
        let keep = match (ext.as_deref(), ext_filter) {
            (Some(ext), Some(wanted)) => ext == wanted,
            (Some(ext), None) => SDL_FILE_EXTS.contains(&ext),
            (None, _) => false,
        };
        if keep {
            log::trace!("Found schema file at {path:#?}.");
            file_paths.push(path.to_path_buf());
        }
    }
    Ok(file_paths)
}
