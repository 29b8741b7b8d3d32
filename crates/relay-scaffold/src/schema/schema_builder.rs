use crate::schema::Field;
use crate::schema::GraphQLTypeKind;
use crate::schema::NamedType;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::builtins;
use graphql_parser::schema::Definition;
use graphql_parser::schema::SchemaDefinition;
use graphql_parser::schema::TypeDefinition;
use graphql_parser::schema::TypeExtension;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
struct PendingFieldExtension {
    fields: Vec<Field>,
    file: PathBuf,
    type_name: String,
}

#[derive(Debug)]
struct RootTypeDecl {
    file: PathBuf,
    type_name: String,
}

/// Utility for building a [Schema] out of one or more SDL sources.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_names: IndexSet<String>,
    field_extensions: Vec<PendingFieldExtension>,
    mutation_type: Option<RootTypeDecl>,
    query_type: Option<RootTypeDecl>,
    str_load_counter: u16,
    subscription_type: Option<RootTypeDecl>,
    type_def_files: HashMap<String, PathBuf>,
    types: IndexMap<String, NamedType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_builtin_types()?;

        for ext in std::mem::take(&mut self.field_extensions) {
            let Some(named_type) = self.types.get_mut(ext.type_name.as_str()) else {
                return Err(SchemaBuildError::ExtensionOfUndefinedType {
                    file: ext.file,
                    type_name: ext.type_name,
                });
            };
            for field in ext.fields {
                named_type.fields.insert(field.name.to_owned(), field);
            }
        }

        for directive_name in builtins::BUILTIN_DIRECTIVE_NAMES {
            self.directive_names.insert(directive_name.to_string());
        }

        let query_type = self.resolve_root_type(OperationKind::Query)?;
        let mutation_type = self.resolve_root_type(OperationKind::Mutation)?;
        let subscription_type = self.resolve_root_type(OperationKind::Subscription)?;

        Ok(Schema {
            directive_names: self.directive_names,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        Self {
            directive_names: IndexSet::new(),
            field_extensions: vec![],
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            type_def_files: HashMap::new(),
            types: IndexMap::new(),
        }
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    /// Reads and loads each file in order.
    pub fn load_files(mut self, file_paths: Vec<impl AsRef<Path>>) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = std::fs::read_to_string(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError {
                    file: file_path.to_path_buf(),
                    err: err.to_string(),
                })?;
            self = self.load_str(Some(file_path.to_path_buf()), content.as_str())?;
        }
        Ok(self)
    }

    /// Parses `content` as SDL and visits every definition in it. `file_path`
    /// only serves to attribute errors; when absent a synthetic `str://N`
    /// path is used.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?;

        for def in &ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    /// Whether a type with the given name has already been loaded.
    pub fn defines_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Whether a directive with the given name has already been loaded.
    pub fn defines_directive(&self, directive_name: &str) -> bool {
        self.directive_names.contains(directive_name)
    }

    fn inject_builtin_types(&mut self) -> Result<()> {
        for scalar_name in builtins::BUILTIN_SCALAR_NAMES {
            if !self.types.contains_key(scalar_name) {
                self.types.insert(
                    scalar_name.to_string(),
                    NamedType::new(scalar_name, GraphQLTypeKind::Scalar),
                );
            }
        }

        let introspection = Self::new().load_str(
            Some(PathBuf::from("builtin://introspection")),
            builtins::INTROSPECTION_SDL,
        )?;
        for (type_name, named_type) in introspection.types {
            self.types.entry(type_name).or_insert(named_type);
        }

        Ok(())
    }

    fn resolve_root_type(&self, kind: OperationKind) -> Result<Option<String>> {
        let declared = match kind {
            OperationKind::Mutation => &self.mutation_type,
            OperationKind::Query => &self.query_type,
            OperationKind::Subscription => &self.subscription_type,
        };

        if let Some(decl) = declared {
            return match self.types.get(decl.type_name.as_str()) {
                Some(named_type) if named_type.kind == GraphQLTypeKind::Object =>
                    Ok(Some(decl.type_name.to_owned())),
                _ => Err(SchemaBuildError::InvalidRootOperationType {
                    file: decl.file.to_owned(),
                    operation: kind,
                    type_name: decl.type_name.to_owned(),
                }),
            };
        }

        let default_name = kind.default_root_type_name();
        Ok(match self.types.get(default_name) {
            Some(named_type) if named_type.kind == GraphQLTypeKind::Object =>
                Some(default_name.to_string()),
            _ => None,
        })
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: &Definition<'_, String>,
    ) -> Result<()> {
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.visit_ast_type_extension(file_path, type_ext);
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) => {
                self.directive_names.insert(directive_def.name.to_owned());
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: &SchemaDefinition<'_, String>,
    ) -> Result<()> {
        let decls = [
            (OperationKind::Query, &schema_def.query),
            (OperationKind::Mutation, &schema_def.mutation),
            (OperationKind::Subscription, &schema_def.subscription),
        ];

        for (kind, type_name) in decls {
            let Some(type_name) = type_name else {
                continue;
            };
            let slot = match kind {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    file1: existing.file.to_owned(),
                    file2: file_path.to_path_buf(),
                    operation: kind,
                });
            }
            *slot = Some(RootTypeDecl {
                file: file_path.to_path_buf(),
                type_name: type_name.to_owned(),
            });
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: &TypeDefinition<'_, String>,
    ) -> Result<()> {
        let named_type = match type_def {
            TypeDefinition::Enum(def) =>
                NamedType::new(def.name.as_str(), GraphQLTypeKind::Enum),

            TypeDefinition::InputObject(def) =>
                NamedType::new(def.name.as_str(), GraphQLTypeKind::InputObject),

            TypeDefinition::Interface(def) => {
                let mut named_type =
                    NamedType::new(def.name.as_str(), GraphQLTypeKind::Interface);
                for ast_field in &def.fields {
                    named_type.fields.insert(
                        ast_field.name.to_owned(),
                        Field::from_ast(ast_field),
                    );
                }
                named_type
            },

            TypeDefinition::Object(def) => {
                let mut named_type =
                    NamedType::new(def.name.as_str(), GraphQLTypeKind::Object);
                for ast_field in &def.fields {
                    named_type.fields.insert(
                        ast_field.name.to_owned(),
                        Field::from_ast(ast_field),
                    );
                }
                named_type
            },

            TypeDefinition::Scalar(def) =>
                NamedType::new(def.name.as_str(), GraphQLTypeKind::Scalar),

            TypeDefinition::Union(def) =>
                NamedType::new(def.name.as_str(), GraphQLTypeKind::Union),
        };

        if let Some(existing_file) = self.type_def_files.get(named_type.name()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                file1: existing_file.to_owned(),
                file2: file_path.to_path_buf(),
                type_name: named_type.name.to_owned(),
            });
        }

        self.type_def_files.insert(
            named_type.name.to_owned(),
            file_path.to_path_buf(),
        );
        self.types.insert(named_type.name.to_owned(), named_type);
        Ok(())
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: &Path,
        type_ext: &TypeExtension<'_, String>,
    ) {
        // Only extensions that add fields matter for scaffolding; the
        // extended type may be defined in a file that hasn't been loaded yet,
        // so merging waits until `build()`.
        let (type_name, ast_fields) = match type_ext {
            TypeExtension::Interface(ext) => (&ext.name, &ext.fields),
            TypeExtension::Object(ext) => (&ext.name, &ext.fields),
            _ => return,
        };

        self.field_extensions.push(PendingFieldExtension {
            fields: ast_fields.iter().map(Field::from_ast).collect(),
            file: file_path.to_path_buf(),
            type_name: type_name.to_owned(),
        });
    }
}
impl std::default::Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple `schema` blocks declare a root {operation} type")]
    DuplicateOperationDefinition {
        file1: PathBuf,
        file2: PathBuf,
        operation: OperationKind,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        file1: PathBuf,
        file2: PathBuf,
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, which is never defined")]
    ExtensionOfUndefinedType {
        file: PathBuf,
        type_name: String,
    },

    #[error(
        "The root {operation} type `{type_name}` is not a defined object type"
    )]
    InvalidRootOperationType {
        file: PathBuf,
        operation: OperationKind,
        type_name: String,
    },

    #[error("Error parsing schema from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failed to read schema file {file:?}: {err}")]
    SchemaFileReadError {
        file: PathBuf,
        err: String,
    },
}
