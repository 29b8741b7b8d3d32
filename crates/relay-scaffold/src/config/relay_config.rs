use indexmap::IndexMap;

/// One path/glob, or a list of them.
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Pointer {
    One(String),
    Many(Vec<String>),
}
impl Pointer {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::One(pointer) => vec![pointer.to_owned()],
            Self::Many(pointers) => pointers.to_owned(),
        }
    }
}

/// The settings of a single project: where its schema lives plus the Relay
/// compiler keys that commonly sit next to it.
#[derive(Clone, Debug, Default, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub artifact_directory: Option<String>,
    pub documents: Option<Pointer>,
    pub exclude: Option<Pointer>,
    #[serde(default)]
    pub extensions: serde_json::Map<String, serde_json::Value>,
    pub include: Option<Pointer>,
    pub schema: Option<Pointer>,
    pub src: Option<String>,
}

/// The parsed contents of a `relay` config file.
///
/// Either a single top-level project, or a `projects` map keyed by project
/// name.
#[derive(Clone, Debug, Default, serde::Deserialize, PartialEq)]
pub struct RelayConfig {
    #[serde(default)]
    pub projects: IndexMap<String, ProjectConfig>,
    #[serde(flatten)]
    pub root: ProjectConfig,
}
impl RelayConfig {
    /// The project scaffolding operates on: the top-level one when it
    /// declares a schema, else the project named `default`, else the first
    /// listed project.
    pub fn default_project(&self) -> Option<&ProjectConfig> {
        if self.root.schema.is_some() {
            return Some(&self.root);
        }

        self.projects.get("default")
            .or_else(|| self.projects.values().next())
    }
}
