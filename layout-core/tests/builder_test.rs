use layout_core::{
    ColumnSpec, FlowBlock, FrameId, LayoutBuilder, LayoutError, PageGeometry, TextStyle,
};

fn make_builder() -> LayoutBuilder {
    LayoutBuilder::new(PageGeometry::letter(20.0, 10.0), ColumnSpec::WidthDelta(40.0)).unwrap()
}

fn paragraph(text: &str) -> FlowBlock {
    FlowBlock::paragraph(text, TextStyle::default())
}

fn paragraph_text(block: &FlowBlock) -> &str {
    match block {
        FlowBlock::Paragraph { text, .. } => text,
        other => panic!("expected paragraph, got {:?}", other),
    }
}

// -------------------------------------------------------
// Frame assignment and ordering
// -------------------------------------------------------

#[test]
fn blocks_before_break_go_left_in_order() {
    let mut builder = make_builder();
    for i in 0..4 {
        builder.append_block(paragraph(&format!("L{}", i)));
    }
    builder.break_to_next_frame().unwrap();
    for i in 0..3 {
        builder.append_block(paragraph(&format!("R{}", i)));
    }

    let doc = builder.build().unwrap();
    assert_eq!(doc.left_blocks().len(), 4);
    assert_eq!(doc.right_blocks().len(), 3);
    for (i, block) in doc.left_blocks().iter().enumerate() {
        assert_eq!(paragraph_text(block), format!("L{}", i));
    }
    for (i, block) in doc.right_blocks().iter().enumerate() {
        assert_eq!(paragraph_text(block), format!("R{}", i));
    }
}

#[test]
fn active_frame_starts_left_and_switches_on_break() {
    let mut builder = make_builder();
    assert_eq!(builder.active_frame(), FrameId::Left);
    builder.break_to_next_frame().unwrap();
    assert_eq!(builder.active_frame(), FrameId::Right);
}

#[test]
fn all_blocks_left_when_no_break() {
    let mut builder = make_builder();
    builder.append_block(paragraph("only"));
    let doc = builder.build().unwrap();
    assert_eq!(doc.left_blocks().len(), 1);
    assert!(doc.right_blocks().is_empty());
}

#[test]
fn break_before_any_content_is_allowed() {
    // An empty left column is a valid layout.
    let mut builder = make_builder();
    builder.break_to_next_frame().unwrap();
    builder.append_block(paragraph("right only"));
    let doc = builder.build().unwrap();
    assert!(doc.left_blocks().is_empty());
    assert_eq!(doc.right_blocks().len(), 1);
}

// -------------------------------------------------------
// Error states
// -------------------------------------------------------

#[test]
fn second_break_fails() {
    let mut builder = make_builder();
    builder.append_block(paragraph("a"));
    builder.break_to_next_frame().unwrap();
    let err = builder.break_to_next_frame().unwrap_err();
    assert!(matches!(err, LayoutError::InvalidLayoutState(_)));
}

#[test]
fn failed_break_leaves_state_usable() {
    let mut builder = make_builder();
    builder.break_to_next_frame().unwrap();
    assert!(builder.break_to_next_frame().is_err());
    // Still on the right frame and able to append.
    assert_eq!(builder.active_frame(), FrameId::Right);
    builder.append_block(paragraph("after failed break"));
    assert!(builder.build().is_ok());
}

#[test]
fn empty_build_fails() {
    let builder = make_builder();
    let err = builder.build().unwrap_err();
    assert!(matches!(err, LayoutError::EmptyDocument));
}

#[test]
fn break_alone_is_still_an_empty_document() {
    let mut builder = make_builder();
    builder.break_to_next_frame().unwrap();
    assert!(matches!(builder.build().unwrap_err(), LayoutError::EmptyDocument));
}

#[test]
fn invalid_geometry_rejected_at_construction() {
    let err =
        LayoutBuilder::new(PageGeometry::letter(20.0, 10.0), ColumnSpec::WidthDelta(400.0))
            .unwrap_err();
    assert!(matches!(err, LayoutError::InvalidGeometry(_)));
}

// -------------------------------------------------------
// Document exposes the computed frames
// -------------------------------------------------------

#[test]
fn document_carries_frame_geometry() {
    let mut builder = make_builder();
    builder.append_block(FlowBlock::spacer(10.0));
    let doc = builder.build().unwrap();
    assert_eq!(doc.left_frame().x, 20.0);
    assert_eq!(doc.left_frame().width, 321.0);
    assert_eq!(doc.right_frame().x, 351.0);
    assert_eq!(doc.right_frame().width, 241.0);
    assert_eq!(doc.geometry().page_width, 612.0);
}

// -------------------------------------------------------
// Independent builders on separate threads
// -------------------------------------------------------

#[test]
fn independent_builds_run_concurrently() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut builder = make_builder();
                builder.append_block(paragraph(&format!("thread {}", i)));
                builder.break_to_next_frame().unwrap();
                builder.append_block(paragraph("right"));
                builder.build().unwrap()
            })
        })
        .collect();
    for handle in handles {
        let doc = handle.join().unwrap();
        assert_eq!(doc.left_blocks().len(), 1);
        assert_eq!(doc.right_blocks().len(), 1);
    }
}
