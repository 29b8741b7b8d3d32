/// Options for a single-select, filterable list prompt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuickPickOptions {
    pub place_holder: Option<String>,
}
impl QuickPickOptions {
    pub fn with_place_holder(place_holder: impl Into<String>) -> Self {
        Self {
            place_holder: Some(place_holder.into()),
        }
    }
}

/// Options for a free-text prompt.
///
/// `validate_input` returns an error message for values that can't be
/// submitted, or `None` when the value is acceptable.
pub struct InputBoxOptions<'a> {
    pub prompt: String,
    pub validate_input: Box<dyn Fn(&str) -> Option<String> + 'a>,
    pub value: String,
}
impl InputBoxOptions<'_> {
    pub fn validate(&self, value: &str) -> Option<String> {
        (self.validate_input)(value)
    }
}
impl std::fmt::Debug for InputBoxOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBoxOptions")
            .field("prompt", &self.prompt)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
