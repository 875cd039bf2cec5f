use core::fmt;

use crate::{
    AspectSet, CellData, Color, Column, EditValue, PenStyle, Rect, RectDefaults, Role, Swatch,
    TableEvent,
};

/// Handle returned by [`RectTable::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type BoxedListener = Box<dyn FnMut(&TableEvent)>;

struct Subscription {
    id: ListenerId,
    listener: BoxedListener,
}

/// An ordered, editable table of [`Rect`] rows.
///
/// Position is the sole row identity: rows are addressed by index in
/// `0..row_count()` and columns by index in `0..Column::COUNT`. The table is
/// created empty; rows are appended or inserted (there is no delete), and the
/// whole sequence can be atomically replaced via [`RectTable::replace_all`].
///
/// All operations are synchronous and single-threaded by construction
/// (`&mut self` on every mutator); listeners run on the calling thread before
/// the mutating call returns.
pub struct RectTable {
    rows: Vec<Rect>,
    defaults: RectDefaults,
    listeners: Vec<Subscription>,
    next_listener_id: u32,
}

impl Default for RectTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RectTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RectTable")
            .field("rows", &self.rows)
            .field("defaults", &self.defaults)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RectTable {
    /// Create an empty table with the stock row defaults.
    pub fn new() -> Self {
        Self::with_defaults(RectDefaults::default())
    }

    /// Create an empty table whose inserted rows use `defaults`.
    pub fn with_defaults(defaults: RectDefaults) -> Self {
        Self {
            rows: Vec::new(),
            defaults,
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    /// Field values used for rows materialized by [`RectTable::insert_rows`].
    pub fn defaults(&self) -> &RectDefaults {
        &self.defaults
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        Column::COUNT
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Rect] {
        &self.rows
    }

    /// A single row; `None` when out of range.
    pub fn row(&self, row: usize) -> Option<&Rect> {
        self.rows.get(row)
    }

    /// Fixed header label for a column index; `None` when out of range.
    pub fn header(&self, col: usize) -> Option<&'static str> {
        Column::from_index(col).map(Column::header)
    }

    /// Vertical header text: the 1-based row number.
    pub fn row_header(&self, row: usize) -> String {
        (row + 1).to_string()
    }

    /// Role-keyed cell query.
    ///
    /// Returns [`CellData::Empty`] for out-of-range coordinates or a role the
    /// column does not support; never panics.
    pub fn cell(&self, row: usize, col: usize, role: Role) -> CellData {
        let Some(column) = Column::from_index(col) else {
            return CellData::Empty;
        };
        let Some(rect) = self.rows.get(row) else {
            return CellData::Empty;
        };

        match role {
            Role::Edit => match column {
                Column::PenColor => CellData::Color(rect.pen_color),
                Column::PenStyle => CellData::Int(rect.pen_style.code()),
                Column::PenWidth => CellData::Int(rect.pen_width),
                Column::Left => CellData::Int(rect.left),
                Column::Top => CellData::Int(rect.top),
                Column::Width => CellData::Int(rect.width),
                Column::Height => CellData::Int(rect.height),
            },
            Role::Display => CellData::Text(match column {
                Column::PenColor => rect.pen_color.to_string(),
                Column::PenStyle => rect.pen_style.to_string(),
                Column::PenWidth => rect.pen_width.to_string(),
                Column::Left => rect.left.to_string(),
                Column::Top => rect.top.to_string(),
                Column::Width => rect.width.to_string(),
                Column::Height => rect.height.to_string(),
            }),
            Role::Decoration => match column {
                Column::PenColor => CellData::Swatch(Swatch::new(rect.pen_color)),
                _ => CellData::Empty,
            },
        }
    }

    /// Validated in-place edit of one cell.
    ///
    /// Returns `false` (and leaves the table untouched) for out-of-range
    /// coordinates, a payload kind the column does not accept, or color text
    /// that does not parse. Setting a cell to its current value succeeds
    /// without emitting a change event.
    pub fn set_cell(&mut self, row: usize, col: usize, value: EditValue) -> bool {
        let Some(column) = Column::from_index(col) else {
            return false;
        };
        if row >= self.rows.len() {
            return false;
        }

        let current = self.rows[row];
        let mut updated = current;

        match column {
            Column::PenColor => {
                let color = match value {
                    EditValue::Color(color) => color,
                    EditValue::Text(ref text) => match Color::parse(text) {
                        Ok(color) => color,
                        Err(_) => return false,
                    },
                    EditValue::Int(_) => return false,
                };
                updated.pen_color = color;
            }
            Column::PenStyle => {
                let EditValue::Int(code) = value else {
                    return false;
                };
                updated.pen_style = PenStyle::from_code(code);
            }
            Column::PenWidth => {
                let EditValue::Int(v) = value else {
                    return false;
                };
                updated.pen_width = v;
            }
            Column::Left => {
                let EditValue::Int(v) = value else {
                    return false;
                };
                updated.left = v;
            }
            Column::Top => {
                let EditValue::Int(v) = value else {
                    return false;
                };
                updated.top = v;
            }
            Column::Width => {
                let EditValue::Int(v) = value else {
                    return false;
                };
                updated.width = v;
            }
            Column::Height => {
                let EditValue::Int(v) = value else {
                    return false;
                };
                updated.height = v;
            }
        }

        if updated == current {
            return true;
        }

        self.rows[row] = updated;
        let aspects = if column == Column::PenColor {
            AspectSet::ALL
        } else {
            AspectSet::VALUE
        };
        self.emit(TableEvent::CellsChanged {
            first_row: row,
            last_row: row,
            first_col: col,
            last_col: col,
            aspects,
        });
        true
    }

    /// Insert `count` default rows at `at`.
    ///
    /// Returns `false` when `count` is zero. `at` is clamped into
    /// `[0, row_count]`: negative positions insert at the front, positions
    /// past the end append. The insertion is bracketed by
    /// [`TableEvent::AboutToInsertRows`] / [`TableEvent::RowsInserted`]
    /// covering exactly the inserted range.
    pub fn insert_rows(&mut self, at: isize, count: usize) -> bool {
        if count == 0 {
            return false;
        }

        let len = self.rows.len();
        let row = at.max(0) as usize;
        let row = row.min(len);

        let first = row;
        let last = row + count - 1;

        self.emit(TableEvent::AboutToInsertRows { first, last });
        let template = self.defaults.rect();
        for offset in 0..count {
            self.rows.insert(row + offset, template);
        }
        self.emit(TableEvent::RowsInserted { first, last });
        true
    }

    /// Append one fully-populated row.
    ///
    /// Equivalent to inserting a default row at the end and overwriting its
    /// fields, followed by a single [`TableEvent::CellsChanged`] spanning the
    /// whole new row with every aspect: a freshly populated row may affect
    /// all displayed aspects at once, unlike a single-cell edit.
    pub fn append_row(&mut self, rect: Rect) {
        let row = self.rows.len();
        if !self.insert_rows(row as isize, 1) {
            return;
        }

        self.rows[row] = rect;
        self.emit(TableEvent::CellsChanged {
            first_row: row,
            last_row: row,
            first_col: 0,
            last_col: Column::COUNT - 1,
            aspects: AspectSet::ALL,
        });
    }

    /// Atomically replace every row, bracketed by
    /// [`TableEvent::AboutToReset`] / [`TableEvent::Reset`].
    ///
    /// Persistence layers call this after a fully validated parse so the live
    /// sequence never holds a partial load.
    pub fn replace_all(&mut self, rows: Vec<Rect>) {
        self.emit(TableEvent::AboutToReset);
        self.rows = rows;
        self.emit(TableEvent::Reset);
    }

    /// Register a change listener; events are delivered synchronously, in
    /// subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&TableEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.wrapping_add(1);
        self.listeners.push(Subscription {
            id,
            listener: Box::new(listener),
        });
        id
    }

    /// Remove a listener by id.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let Some(idx) = self.listeners.iter().position(|s| s.id == id) else {
            return false;
        };
        self.listeners.remove(idx);
        true
    }

    fn emit(&mut self, event: TableEvent) {
        for subscription in &mut self.listeners {
            (subscription.listener)(&event);
        }
    }
}
