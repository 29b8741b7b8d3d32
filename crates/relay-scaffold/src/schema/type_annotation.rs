use graphql_parser::schema::Type as AstType;

/// The annotated type of a [`Field`](crate::schema::Field) or
/// [`Argument`](crate::schema::Argument).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(ast_type: &AstType<'_, String>) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ast_type: &AstType<'_, String>,
        nullable: bool,
    ) -> Self {
        match ast_type {
            AstType::ListType(inner) =>
                Self::List {
                    inner: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                },

            AstType::NamedType(name) =>
                Self::Named {
                    name: name.to_owned(),
                    nullable,
                },

            AstType::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap list and non-null wrappers and return the name of
    /// the inner-most named type.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_type_name(),
            Self::Named { name, .. } => name.as_str(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        let (inner_str, nullable) = match self {
            Self::List { inner, nullable } =>
                (format!("[{}]", inner.to_graphql_string()), *nullable),
            Self::Named { name, nullable } =>
                (name.to_owned(), *nullable),
        };

        if nullable {
            inner_str
        } else {
            format!("{inner_str}!")
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
