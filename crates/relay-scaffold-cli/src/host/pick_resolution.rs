/// How a line typed at a quick-pick prompt maps onto the offered items.
#[derive(Debug, PartialEq)]
pub(crate) enum PickResolution<'a> {
    Ambiguous(Vec<&'a str>),
    Cancelled,
    NoMatch,
    Picked(&'a str),
}
impl<'a> PickResolution<'a> {
    /// An empty line cancels. Otherwise the input is tried as a 1-based item
    /// number, then as an exact item, then as a case-insensitive substring
    /// filter that must narrow the items down to one.
    pub(crate) fn resolve(items: &'a [String], input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::Cancelled;
        }

        if let Ok(number) = input.parse::<usize>()
            && let Some(item) = number.checked_sub(1).and_then(|idx| items.get(idx)) {
            return Self::Picked(item.as_str());
        }

        if let Some(item) = items.iter().find(|item| item.as_str() == input) {
            return Self::Picked(item.as_str());
        }

        let filter = input.to_lowercase();
        let mut matches: Vec<&str> = items.iter()
            .map(String::as_str)
            .filter(|item| item.to_lowercase().contains(filter.as_str()))
            .collect();
        match matches.len() {
            0 => Self::NoMatch,
            1 => Self::Picked(matches.remove(0)),
            _ => Self::Ambiguous(matches),
        }
    }
}
