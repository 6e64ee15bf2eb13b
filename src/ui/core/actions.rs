/// Screens and destinations reachable from the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTarget {
    #[default]
    Dashboard,
    Products,
    NewSale,
    Reports,
}

/// Actions emitted by components in response to user input.
///
/// Components never mutate state they do not own; they describe what the
/// user asked for and the application shell applies it.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(NavTarget),

    // Selection movement inside a component
    NextItem,
    PreviousItem,

    // Row / action activation
    Activate,

    // Modal control
    CloseModal,

    // App control
    Quit,
    None,
}
