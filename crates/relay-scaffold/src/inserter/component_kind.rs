use crate::schema::OperationKind;
use crate::schema::Schema;
use thiserror::Error;

/// What the user asked to scaffold.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComponentKind {
    Fragment,
    Mutation,
    Query,
    Subscription,
}
impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        Self::Fragment,
        Self::Query,
        Self::Mutation,
        Self::Subscription,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fragment => "Fragment",
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }

    /// The operation this kind generates, or `None` for fragments.
    pub fn operation_kind(&self) -> Option<OperationKind> {
        match self {
            Self::Fragment => None,
            Self::Mutation => Some(OperationKind::Mutation),
            Self::Query => Some(OperationKind::Query),
            Self::Subscription => Some(OperationKind::Subscription),
        }
    }

    pub(crate) fn quick_pick_place_holder(&self) -> &'static str {
        match self {
            Self::Fragment => "Select type of the fragment",
            Self::Mutation => "Select mutation",
            Self::Query => "Select root field",
            Self::Subscription => "Select subscription",
        }
    }

    /// The names offered in the initial quick pick.
    ///
    /// Fragments can target any object, interface or union type; operations
    /// pick a field of the matching root type. `__`-prefixed names are never
    /// offered.
    pub fn selectable_items(&self, schema: &Schema) -> Vec<String> {
        match self.operation_kind() {
            None =>
                schema.all_types().values()
                    .filter(|named_type| {
                        named_type.kind().is_composite()
                            && !named_type.is_introspection_type()
                    })
                    .map(|named_type| named_type.name().to_string())
                    .collect(),

            Some(operation_kind) =>
                schema.root_operation_type(operation_kind)
                    .map(|root_type| {
                        root_type.fields().keys()
                            .filter(|field_name| !field_name.starts_with("__"))
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default(),
        }
    }
}
impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl std::str::FromStr for ComponentKind {
    type Err = ParseComponentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseComponentKindError(s.to_string()))
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "`{0}` is not a component kind (expected Fragment, Query, Mutation or \
    Subscription)"
)]
pub struct ParseComponentKindError(pub String);
