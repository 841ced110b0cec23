// Property-based tests using proptest
// Random edit sequences against a session, checking cursor and size invariants

mod common;

use common::{assert_cursor_valid, default_session};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(String),
    Tab,
    Backspace,
    MoveTo(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z \\n]{1,8}".prop_map(Op::Insert),
        Just(Op::Tab),
        Just(Op::Backspace),
        (0usize..20, 0usize..40).prop_map(|(line, col)| Op::MoveTo(line, col)),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

// Property: no edit sequence can push the cursor outside the document
proptest! {
    #[test]
    fn edits_keep_cursor_in_document(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let rt = runtime();
        let _guard = rt.enter();
        let mut session = default_session();

        for op in ops {
            match op {
                Op::Insert(text) => session.insert_text(&text).unwrap(),
                Op::Tab => session.insert_tab().unwrap(),
                Op::Backspace => {
                    session.delete_backward().unwrap();
                }
                Op::MoveTo(line, col) => session.set_cursor(line, col),
            }
            assert_cursor_valid(&session);
        }
    }
}

// Property: once typing stops, the label matches the final content length
proptest! {
    #[test]
    fn settled_label_matches_content(chunks in prop::collection::vec("[a-zé\\n]{0,300}", 1..10)) {
        let rt = runtime();
        let label = rt.block_on(async {
            let mut session = default_session();
            for chunk in &chunks {
                session.insert_text(chunk).unwrap();
            }
            tokio::time::sleep(std::time::Duration::from_millis(350)).await;
            (session.size_label(), session.text().len())
        });
        prop_assert_eq!(label.0, edoc::size::format_size(label.1 as u64));
    }
}
