use crate::table::SortDirection;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Cursor movement
    NextRow,
    PreviousRow,
    FirstRow,
    LastRow,
    NextColumn,
    PreviousColumn,

    // Table interaction
    SortColumn(usize), // Header interaction on a column index
    ToggleRow(usize),  // Row interaction on a derived-view index

    // Outcomes reported to the parent
    SortChanged {
        field: String,
        direction: SortDirection,
    },
    SelectionChanged(usize), // New selection size

    // Demo controls
    NextStory,
    ToggleLoading,
    ToggleLogPanel,
    ClearLogs,

    // App control
    Quit,
    None,
}
