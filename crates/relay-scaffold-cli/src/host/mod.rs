mod file_editor;
mod pick_resolution;
mod terminal_host;

pub(crate) use file_editor::FileEditor;
pub(crate) use pick_resolution::PickResolution;
pub(crate) use terminal_host::TerminalHost;
