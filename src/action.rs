// Every user interaction, async result, and internal event is represented as an
// Action variant. The App event loop dispatches these to component handlers.

use crate::catalog::models::ModeRecord;

/// All events flowing through the app: user actions, the catalog load
/// result, and the frame tick. The [`App`](crate::app::App) event loop
/// dispatches each variant to the appropriate handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Back,

    LoadCatalog,
    CatalogLoaded(Vec<ModeRecord>),
    CatalogFailed(String),

    /// A card was clicked; resolved against the catalog by name.
    OpenMode {
        name: String,
    },
    CloseModal,
    GalleryPrev,
    GalleryNext,
    GallerySelect(usize),

    FocusSearch,
    SearchSubmit,
    SearchCleared,

    ShowHelp,
    HideHelp,
    Tick,
}
