use crate::host::Position;

/// How a command invocation ended, short of an error.
#[derive(Clone, Debug, PartialEq)]
pub enum InsertOutcome {
    /// Nothing was inserted and the document was not saved.
    Aborted(AbortReason),

    /// `text` was inserted, the caret moved to `caret` and the document was
    /// saved.
    Inserted {
        caret: Position,
        module_name: String,
        text: String,
    },
}
impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AbortReason {
    /// The user dismissed a prompt.
    Cancelled,

    NoActiveEditor,

    /// The picked type or field is not (or no longer) in the schema.
    UnresolvedSchemaElement,
}
