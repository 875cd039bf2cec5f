use std::io::Cursor;

use pretty_assertions::assert_eq;
use sketch_io::{
    load_tsv_file, load_tsv_file_into, load_tsv_into, read_tsv, save_tsv_file, write_tsv, TsvError,
};
use sketch_model::{CellData, Color, PenStyle, Rect, RectTable, Role, TableEvent};

fn sample_rows() -> Vec<Rect> {
    vec![
        Rect::new(Color::new(0x11, 0x22, 0x33), PenStyle::Dot, 5, 10, 20, 30, 40),
        Rect::new(Color::new(0xAA, 0xBB, 0xCC), PenStyle::Dash, 1, 0, 0, 1, 2),
    ]
}

#[test]
fn serializes_the_documented_wire_format() {
    let mut out = Vec::new();
    write_tsv(&sample_rows(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "#112233\tDotLine\t5\t10\t20\t30\t40\n\
         #AABBCC\tDashLine\t1\t0\t0\t1\t2\n"
    );
}

#[test]
fn serializes_unknown_styles_with_the_fallback_label() {
    let rows = vec![Rect {
        pen_style: PenStyle::from_code(42),
        ..Rect::default()
    }];
    let mut out = Vec::new();
    write_tsv(&rows, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "#000000\tPenStyle(42)\t1\t0\t0\t10\t10\n"
    );
}

#[test]
fn roundtrip_preserves_every_field() {
    let rows = sample_rows();
    let mut out = Vec::new();
    write_tsv(&rows, &mut out).unwrap();
    let back = read_tsv(Cursor::new(out)).unwrap();
    assert_eq!(back, rows);
}

#[test]
fn unknown_style_codes_roundtrip() {
    let rows = vec![Rect {
        pen_style: PenStyle::from_code(-7),
        ..Rect::default()
    }];
    let mut out = Vec::new();
    write_tsv(&rows, &mut out).unwrap();
    let back = read_tsv(Cursor::new(out)).unwrap();
    assert_eq!(back[0].pen_style.code(), -7);
}

#[test]
fn loads_records_in_order() {
    let input = "#112233\tDotLine\t5\t10\t20\t30\t40\n#AABBCC\tDashLine\t1\t0\t0\t1\t2\n";
    let rows = read_tsv(Cursor::new(input)).unwrap();
    assert_eq!(rows, sample_rows());
}

#[test]
fn accepts_all_three_style_forms() {
    let input = "#112233\t3\t1\t0\t0\t10\t10\n\
                 #445566\tPenStyle(3)\t2\t1\t2\t3\t4\n\
                 #778899\tDotLine\t3\t5\t6\t7\t8\n";
    let rows = read_tsv(Cursor::new(input)).unwrap();
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.pen_style, PenStyle::Dot);
    }
}

#[test]
fn skips_blank_lines_without_losing_line_numbers() {
    let input = "\n   \n#112233\tDotLine\t5\t10\t20\t30\t40\n\n#AABBCC\tDashLine\t1\t0\t0\t1\t2\n";
    let rows = read_tsv(Cursor::new(input)).unwrap();
    assert_eq!(rows.len(), 2);

    // A bad record after two blank lines reports its physical line number.
    let input = "\n\n#112233\tDotLine\t5\t10\t20\t30\n";
    let err = read_tsv(Cursor::new(input)).unwrap_err();
    match err {
        TsvError::FieldCount { line, expected, found } => {
            assert_eq!((line, expected, found), (3, 7, 6));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn last_line_without_trailing_newline_is_accepted() {
    let input = "#112233\tDotLine\t5\t10\t20\t30\t40";
    let rows = read_tsv(Cursor::new(input)).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn wrong_field_count_aborts_with_line_number() {
    let input = "#112233\tDotLine\t1\t0\t0\t10\t10\n#112233\tDotLine\t1\t0\t0\t10\n";
    let err = read_tsv(Cursor::new(input)).unwrap_err();
    let message = err.to_string();
    assert_eq!(message, "line 2: expected 7 tab-separated fields, found 6");
}

#[test]
fn bad_color_aborts_with_field_name() {
    let input = "NOT_A_COLOR\tDotLine\t1\t0\t0\t10\t10\n";
    let err = read_tsv(Cursor::new(input)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 1"), "{message}");
    assert!(message.contains("PenColor"), "{message}");
    assert!(message.contains("NOT_A_COLOR"), "{message}");
}

#[test]
fn bad_style_aborts_with_field_name() {
    let input = "#112233\tSomeUnknownStyle\t1\t0\t0\t10\t10\n";
    let err = read_tsv(Cursor::new(input)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 1"), "{message}");
    assert!(message.contains("PenStyle"), "{message}");
    assert!(message.contains("SomeUnknownStyle"), "{message}");
}

#[test]
fn bad_integer_aborts_with_field_name() {
    let input = "#112233\tDotLine\t1\tNOPE\t0\t10\t10\n";
    let err = read_tsv(Cursor::new(input)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 1"), "{message}");
    assert!(message.contains("Left"), "{message}");
    assert!(message.contains("NOPE"), "{message}");
}

#[test]
fn failed_load_leaves_the_table_untouched() {
    let malformed: &[&str] = &[
        "#112233\tDotLine\t1\t0\t0\t10\n",          // six fields
        "NOT_A_COLOR\tDotLine\t1\t0\t0\t10\t10\n",  // bad color
        "#112233\tNoSuchStyle\t1\t0\t0\t10\t10\n",  // bad style
        "#112233\tDotLine\t1\tNOPE\t0\t10\t10\n",   // bad integer
        "#112233\tDotLine\t1\t0\t0\t10\t10\nbroken line\n", // bad second line
    ];

    for input in malformed {
        let mut table = RectTable::new();
        table.append_row(Rect::new(
            Color::new(0xAB, 0xCD, 0xEF),
            PenStyle::Dash,
            7,
            1,
            2,
            3,
            4,
        ));
        let before = table.rows().to_vec();

        assert!(load_tsv_into(&mut table, Cursor::new(*input)).is_err(), "{input:?}");
        assert_eq!(table.rows(), before.as_slice(), "{input:?}");
    }
}

#[test]
fn failed_load_emits_no_events() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut table = RectTable::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    table.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    let input = "#112233\tDotLine\t1\t0\t0\t10\n";
    assert!(load_tsv_into(&mut table, Cursor::new(input)).is_err());
    assert!(log.borrow().is_empty());
}

#[test]
fn successful_load_replaces_rows_with_reset_bracketing() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut table = RectTable::new();
    table.append_row(Rect::default());

    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    table.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    let input = "#112233\tDotLine\t5\t10\t20\t30\t40\n#AABBCC\tDashLine\t1\t0\t0\t1\t2\n";
    load_tsv_into(&mut table, Cursor::new(input)).unwrap();

    assert_eq!(*log.borrow(), vec![TableEvent::AboutToReset, TableEvent::Reset]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 0, Role::Display), CellData::Text("#112233".into()));
    assert_eq!(table.cell(0, 1, Role::Display), CellData::Text("DotLine".into()));
    assert_eq!(table.cell(1, 1, Role::Display), CellData::Text("DashLine".into()));
}

#[test]
fn file_entry_points_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rects.tsv");

    let rows = sample_rows();
    save_tsv_file(&rows, &path).unwrap();

    assert_eq!(load_tsv_file(&path).unwrap(), rows);

    let mut table = RectTable::new();
    load_tsv_file_into(&mut table, &path).unwrap();
    assert_eq!(table.rows(), rows.as_slice());
}

#[test]
fn missing_file_surfaces_as_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.tsv");

    let err = load_tsv_file(&path).unwrap_err();
    assert!(matches!(err, TsvError::Io(_)), "{err:?}");

    // The table stays untouched when the file cannot be opened.
    let mut table = RectTable::new();
    table.append_row(Rect::default());
    assert!(load_tsv_file_into(&mut table, &path).is_err());
    assert_eq!(table.row_count(), 1);
}
