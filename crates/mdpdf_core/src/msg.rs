#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Move the selection one row up.
    CursorUp,
    /// Move the selection one row down.
    CursorDown,
    /// Jump to the first row.
    CursorTop,
    /// Jump to the last row.
    CursorBottom,
    /// User pressed the trigger on the selected row.
    ConvertRequested,
    /// User acknowledged the error screen.
    DismissError,
    /// Engine completion for a conversion job.
    ConversionFinished {
        job_id: crate::JobId,
        result: crate::ConversionResult,
    },
    /// Quit signal; valid in every mode.
    QuitRequested,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for unmapped input.
    NoOp,
}
