use grid_playground_engine::{
    Breakpoint, Cmd, Column, ColumnId, ColumnProp, ContainerType, Layout, LayoutError,
    MAX_COLUMNS, OrderToken, RowField, SelectionTarget, WidthToken, generate_markup,
    resolve_column_classes,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn column_ids(layout: &Layout, row: usize) -> Vec<ColumnId> {
    layout.rows()[row].columns().iter().map(|c| c.id()).collect()
}

/// A layout whose first row is emptied then filled back to `n` columns
fn layout_with_columns(n: usize) -> Layout {
    let mut layout = Layout::new();
    while !layout.rows()[0].is_empty() {
        layout.delete_column(0, 0).unwrap();
    }
    for _ in 0..n {
        layout.add_column(0).unwrap();
    }
    layout
}

#[test]
fn deleting_and_re_adding_a_row_yields_fresh_identity() {
    let mut layout = Layout::new();
    let first = layout.rows()[0].id();
    let first_cols = column_ids(&layout, 0);

    layout.delete_row(0).unwrap();
    assert!(layout.rows().is_empty());
    layout.add_row();

    assert_eq!(layout.rows().len(), 1);
    assert_ne!(layout.rows()[0].id(), first);
    assert!(column_ids(&layout, 0).iter().all(|id| !first_cols.contains(id)));
    assert_eq!(layout.rows()[0].len(), 2);
}

#[test]
fn twelve_columns_fit_and_the_thirteenth_is_rejected() {
    let mut layout = layout_with_columns(0);
    for i in 0..MAX_COLUMNS {
        layout
            .add_column(0)
            .unwrap_or_else(|e| panic!("add {i} failed: {e}"));
    }
    assert!(layout.rows()[0].is_full());

    let version = layout.version();
    let err = layout.add_column(0).unwrap_err();
    assert_eq!(err, LayoutError::CapacityExceeded { row: 0, max: 12 });
    assert_eq!(layout.rows()[0].len(), MAX_COLUMNS);
    assert_eq!(layout.version(), version);
}

#[test]
fn resolving_classes_does_not_change_the_column() {
    let mut column = Column::new(3);
    column
        .set_width(Breakpoint::Xs, Some(WidthToken::Span(4)))
        .set_width(Breakpoint::Md, Some(WidthToken::Span(6)))
        .set_order(Breakpoint::Xl, Some(OrderToken::First));
    let before = column.clone();

    let first = resolve_column_classes(&column);
    let second = resolve_column_classes(&column);

    assert_eq!(first, second);
    assert_eq!(column, before);
    assert_eq!(first, vec!["col-4", "col-md-6", "order-xl-first"]);
}

#[rstest]
#[case(Breakpoint::Xs, "4", "col-4")]
#[case(Breakpoint::Sm, "auto", "col-sm-auto")]
#[case(Breakpoint::Md, "col", "col-md")]
#[case(Breakpoint::Lg, "col-auto", "col-lg-auto")]
#[case(Breakpoint::Xxl, "12", "col-xxl-12")]
fn width_at_breakpoint_maps_to_class(
    #[case] bp: Breakpoint,
    #[case] value: &str,
    #[case] class: &str,
) {
    let mut layout = Layout::new();
    layout
        .update_column_field(0, 0, ColumnProp::Width, bp, value)
        .unwrap();
    assert_eq!(resolve_column_classes(layout.column(0, 0).unwrap()), vec![class]);
}

#[test]
fn markup_has_one_element_per_row_and_column() {
    let mut layout = Layout::new();
    layout.add_row();
    layout.add_row();
    layout.add_column(1).unwrap();
    layout.delete_column(2, 0).unwrap();

    let markup = generate_markup(&layout);
    let lines: Vec<&str> = markup.lines().collect();

    let row_lines = lines
        .iter()
        .filter(|l| l.starts_with("  <div class=\"row"))
        .count();
    let column_lines = lines.iter().filter(|l| l.starts_with("    <div")).count();
    assert_eq!(row_lines, 3);
    assert_eq!(column_lines, 2 + 3 + 1);
    assert_eq!(lines.first(), Some(&"<div class=\"container\">"));
    assert_eq!(lines.last(), Some(&"</div>"));
}

#[test]
fn markup_for_a_configured_layout() {
    let mut layout = Layout::with_container_type(ContainerType::Fluid);
    layout.update_row_field(0, RowField::GutterY, "4").unwrap();
    layout
        .update_column_field(0, 0, ColumnProp::Width, Breakpoint::Md, "8")
        .unwrap();
    layout
        .update_column_field(0, 1, ColumnProp::Width, Breakpoint::Md, "4")
        .unwrap();
    layout
        .update_column_field(0, 1, ColumnProp::Offset, Breakpoint::Xs, "0")
        .unwrap();

    insta::assert_snapshot!(layout.markup(), @r#"
    <div class="container-fluid">
      <div class="row gy-4">
        <div class="col-md-8">...</div>
        <div class="col-md-4 offset-0">...</div>
      </div>
    </div>
    "#);
}

#[test]
fn moving_first_column_before_index_two_swaps_first_pair() {
    let mut layout = layout_with_columns(3);
    let [a, b, c] = column_ids(&layout, 0)[..] else {
        panic!("expected three columns")
    };

    layout.move_column(0, 0, 0, 2).unwrap();
    assert_eq!(column_ids(&layout, 0), vec![b, a, c]);
}

#[test]
fn moving_into_a_full_row_is_rejected_atomically() {
    let mut layout = layout_with_columns(MAX_COLUMNS);
    layout.add_row();
    let full_before = column_ids(&layout, 0);
    let source_before = column_ids(&layout, 1);

    let err = layout
        .apply(Cmd::MoveColumn {
            from_row: 1,
            from_col: 1,
            to_row: 0,
            to_col: 6,
        })
        .unwrap_err();

    assert!(matches!(err, LayoutError::CapacityExceeded { row: 0, .. }));
    assert_eq!(column_ids(&layout, 0), full_before);
    assert_eq!(column_ids(&layout, 1), source_before);
}

#[test]
fn selection_follows_entities_through_edits() {
    let mut layout = Layout::new();
    layout.add_row();
    layout.add_row();

    // Selected row shifts up when an earlier row goes away
    layout.apply(Cmd::SelectRow { row: 2 }).unwrap();
    let patch = layout.apply(Cmd::DeleteRow { row: 0 }).unwrap();
    assert_eq!(patch.selection, Some(SelectionTarget::Row { row: 1 }));

    // Deleting the selected row clears it
    let patch = layout.apply(Cmd::DeleteRow { row: 1 }).unwrap();
    assert_eq!(patch.selection, None);

    // Selected column is re-indexed when an earlier sibling is deleted
    layout.apply(Cmd::AddColumn { row: 0 }).unwrap();
    layout.apply(Cmd::SelectColumn { row: 0, col: 2 }).unwrap();
    let patch = layout.apply(Cmd::DeleteColumn { row: 0, col: 0 }).unwrap();
    assert_eq!(patch.selection, Some(SelectionTarget::Column { row: 0, col: 1 }));

    // Deleting the row that holds the selected column clears it
    let patch = layout.apply(Cmd::DeleteRow { row: 0 }).unwrap();
    assert_eq!(patch.selection, None);
    assert_eq!(layout.rows().len(), 0);
}

#[test]
fn rejected_commands_leave_layout_untouched() {
    let mut layout = Layout::new();
    let markup = layout.markup();

    let cmds = [
        Cmd::DeleteRow { row: 3 },
        Cmd::AddColumn { row: 1 },
        Cmd::DeleteColumn { row: 0, col: 2 },
        Cmd::UpdateRow {
            row: 0,
            field: RowField::JustifyContent,
            value: "sideways".to_string(),
        },
        Cmd::UpdateColumn {
            row: 0,
            col: 0,
            prop: ColumnProp::Order,
            breakpoint: Breakpoint::Md,
            value: "9".to_string(),
        },
        Cmd::SetHeight {
            row: 0,
            col: 0,
            value: "-5px".to_string(),
        },
    ];

    for cmd in cmds {
        assert!(layout.apply(cmd.clone()).is_err(), "{cmd:?} should fail");
    }
    assert_eq!(layout.markup(), markup);
    assert_eq!(layout.version(), 0);
}
