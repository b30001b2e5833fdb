// actions module - every command reachable from the menu or a shortcut
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    // File
    New,
    Open,
    Save,
    SaveAs,
    Print,
    Exit,

    // Edit
    Copy,
    Cut,
    Paste,
    SelectAll,

    // Format / Help
    Font,
    About,
}
