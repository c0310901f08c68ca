use crate::menu::MenuAction;

/// Messages flowing between the event loop and components
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Render,

    // Bar navigation
    FocusNext,
    FocusPrevious,
    Activate,

    // Dropdowns
    ToggleGroup(String),
    CloseGroup,
    MenuNext,
    MenuPrevious,
    MenuActivate,

    // Results of activation
    Invoke(MenuAction),
    InvokeDisabled(String),

    // Layout
    ResizeSettled(u16), // Terminal width after the debounce window

    // Overlays
    ToggleDebugLogs,
}
