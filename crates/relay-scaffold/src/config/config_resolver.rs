use crate::config::ConfigError;
use crate::config::GraphQLConfig;
use crate::config::RelayConfig;
use crate::config::RelayDirectivesExtension;
use crate::config::SchemaExtension;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ConfigError>;

/// The conventional config name scaffolding looks for.
pub const CONFIG_NAME: &str = "relay";

#[derive(Clone, Copy, Debug)]
enum ConfigFormat {
    JavaScript,
    Json,
    PackageJson,
    Toml,
    Yaml,
}

/// Locates and parses a named project config file in a workspace root.
#[derive(Clone, Debug)]
pub struct ConfigResolver {
    config_name: String,
    extensions: Vec<Arc<dyn SchemaExtension>>,
}
impl ConfigResolver {
    pub fn new(config_name: impl Into<String>) -> Self {
        Self {
            config_name: config_name.into(),
            extensions: vec![],
        }
    }

    /// A resolver for the `relay` config with the Relay directives
    /// extension registered.
    pub fn relay() -> Self {
        Self::new(CONFIG_NAME).with_extension(RelayDirectivesExtension)
    }

    pub fn with_extension(mut self, ext: impl SchemaExtension + 'static) -> Self {
        self.extensions.push(Arc::new(ext));
        self
    }

    /// Candidate file names, in search order.
    fn search_places(&self) -> Vec<(String, ConfigFormat)> {
        let name = self.config_name.as_str();
        vec![
            (format!("{name}.config.json"), ConfigFormat::Json),
            (format!("{name}.config.yaml"), ConfigFormat::Yaml),
            (format!("{name}.config.yml"), ConfigFormat::Yaml),
            (format!("{name}.config.toml"), ConfigFormat::Toml),
            (format!("{name}.config.js"), ConfigFormat::JavaScript),
            (format!("{name}.config.ts"), ConfigFormat::JavaScript),
            (format!(".{name}rc"), ConfigFormat::Yaml),
            (format!(".{name}rc.json"), ConfigFormat::Json),
            (format!(".{name}rc.yaml"), ConfigFormat::Yaml),
            (format!(".{name}rc.yml"), ConfigFormat::Yaml),
            (format!(".{name}rc.toml"), ConfigFormat::Toml),
            (format!(".{name}rc.js"), ConfigFormat::JavaScript),
            (format!(".{name}rc.ts"), ConfigFormat::JavaScript),
            ("package.json".to_string(), ConfigFormat::PackageJson),
        ]
    }

    /// Finds and parses the config in `workspace_root`.
    ///
    /// Absence and failure look the same to the caller: both yield `None`.
    /// Failures are logged.
    pub async fn resolve(&self, workspace_root: &Path) -> Option<GraphQLConfig> {
        match self.try_resolve(workspace_root).await {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring `{}` config: {err}", self.config_name);
                None
            },
        }
    }

    async fn try_resolve(&self, workspace_root: &Path) -> Result<Option<GraphQLConfig>> {
        for (file_name, format) in self.search_places() {
            let path = workspace_root.join(file_name.as_str());
            let is_file = tokio::fs::metadata(path.as_path()).await
                .is_ok_and(|metadata| metadata.is_file());
            if !is_file {
                continue;
            }

            log::trace!("Found candidate config file at {path:#?}.");
            let Some(relay_config) = self.parse_config_file(path.as_path(), format).await? else {
                continue;
            };

            let project = relay_config.default_project()
                .filter(|project| project.schema.is_some())
                .cloned()
                .ok_or_else(|| ConfigError::MissingSchema {
                    path: path.to_owned(),
                })?;

            log::debug!("Using `{}` config at {path:#?}.", self.config_name);
            return Ok(Some(GraphQLConfig {
                config_path: path,
                extensions: self.extensions.clone(),
                project,
            }));
        }

        Ok(None)
    }

    /// Returns `Ok(None)` when the file exists but holds no config for this
    /// name (a `package.json` without the matching key).
    async fn parse_config_file(
        &self,
        path: &Path,
        format: ConfigFormat,
    ) -> Result<Option<RelayConfig>> {
        let content = tokio::fs::read_to_string(path).await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let parse_err = |message: String| ConfigError::Parse {
            message,
            path: path.to_path_buf(),
        };

        let config = match format {
            ConfigFormat::JavaScript =>
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                }),

            ConfigFormat::Json =>
                serde_json::from_str::<RelayConfig>(content.as_str())
                    .map_err(|err| parse_err(err.to_string()))?,

            ConfigFormat::PackageJson => {
                let mut package: serde_json::Value =
                    serde_json::from_str(content.as_str())
                        .map_err(|err| parse_err(err.to_string()))?;
                let Some(section) = package.get_mut(self.config_name.as_str()).map(serde_json::Value::take) else {
                    return Ok(None);
                };
                serde_json::from_value::<RelayConfig>(section)
                    .map_err(|err| parse_err(err.to_string()))?
            },

            ConfigFormat::Toml =>
                toml::from_str::<RelayConfig>(content.as_str())
                    .map_err(|err| parse_err(err.to_string()))?,

            ConfigFormat::Yaml =>
                serde_yaml::from_str::<RelayConfig>(content.as_str())
                    .map_err(|err| parse_err(err.to_string()))?,
        };

        Ok(Some(config))
    }
}
