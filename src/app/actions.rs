#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTheme,
    Activate,

    FocusNext,
    FocusPrev,
    ToggleHelp,
    CloseHelp,

    ListUp,
    ListDown,
    GoTop,
    GoBottom,

    SetButtonHover(bool),
    Resize,
}
