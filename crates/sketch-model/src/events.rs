/// A display aspect affected by a data change.
///
/// Mirrors the three query roles: a listener repaints display text, refreshes
/// open editors, or redraws decorations depending on which aspects an event
/// carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Aspect {
    Display,
    Edit,
    Decoration,
}

/// The set of display aspects carried by [`TableEvent::CellsChanged`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct AspectSet {
    pub display: bool,
    pub edit: bool,
    pub decoration: bool,
}

impl AspectSet {
    /// Aspects touched by a single-field edit outside the color column.
    pub const VALUE: AspectSet = AspectSet {
        display: true,
        edit: true,
        decoration: false,
    };

    /// All aspects: color-column edits and whole-row rewrites.
    pub const ALL: AspectSet = AspectSet {
        display: true,
        edit: true,
        decoration: true,
    };

    pub const fn contains(self, aspect: Aspect) -> bool {
        match aspect {
            Aspect::Display => self.display,
            Aspect::Edit => self.edit,
            Aspect::Decoration => self.decoration,
        }
    }
}

/// Change notification pushed synchronously to table listeners.
///
/// Structural mutations are bracketed: the `AboutTo*` event fires before the
/// mutation is externally visible and its paired event fires after, so
/// observers can safely cache size expectations across the mutation. All row
/// and column ranges are inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// Rows `first..=last` are about to be inserted.
    AboutToInsertRows { first: usize, last: usize },
    /// Rows `first..=last` have been inserted.
    RowsInserted { first: usize, last: usize },
    /// The entire row sequence is about to be replaced.
    AboutToReset,
    /// The entire row sequence was replaced; row count, every cell, and every
    /// role may have changed.
    Reset,
    /// Cells in the given inclusive ranges changed, limited to `aspects`.
    CellsChanged {
        first_row: usize,
        last_row: usize,
        first_col: usize,
        last_col: usize,
        aspects: AspectSet,
    },
}
