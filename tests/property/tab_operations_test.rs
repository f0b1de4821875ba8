//! Property-based tests for tab operations.
//!
//! For any sequence of creations, closures and switches, the container keeps
//! at least one tab and its active index stays in bounds.

use proptest::prelude::*;
use tabshell::managers::tab_manager::{TabManager, TabManagerTrait};
use tabshell::types::tab::TabId;

/// Operations that can be performed on the TabManager.
#[derive(Debug, Clone)]
enum TabOp {
    Create,
    Close(usize), // index into the current tab order
    Switch(usize),
    Next,
    Prev,
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Create),
            3 => (0..20usize).prop_map(TabOp::Close),
            2 => (0..20usize).prop_map(TabOp::Switch),
            1 => Just(TabOp::Next),
            1 => Just(TabOp::Prev),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tab_count_and_active_index_invariant(ops in arb_tab_ops()) {
        let mut manager: TabManager<()> = TabManager::new();
        manager.create_tab(TabId::new(), ());
        let mut expected_count: usize = 1;

        for op in &ops {
            match op {
                TabOp::Create => {
                    let id = manager.create_tab(TabId::new(), ());
                    expected_count += 1;
                    prop_assert_eq!(manager.active_id(), Some(id));
                }
                TabOp::Close(idx) => {
                    let order = manager.get_tab_order();
                    let tab_id = order[idx % order.len()];
                    let was_active = manager.active_id() == Some(tab_id);
                    let before = manager.active_id();

                    let closed = manager.close_tab(tab_id).unwrap();
                    if order.len() == 1 {
                        prop_assert!(!closed, "closing the last tab must be refused");
                    } else {
                        prop_assert!(closed);
                        expected_count -= 1;
                        if !was_active {
                            prop_assert_eq!(manager.active_id(), before);
                        }
                    }
                }
                TabOp::Switch(idx) => {
                    let order = manager.get_tab_order();
                    let tab_id = order[idx % order.len()];
                    manager.switch_tab(tab_id).unwrap();
                    prop_assert_eq!(manager.current().unwrap().id, tab_id);
                }
                TabOp::Next => {
                    manager.next_tab().unwrap();
                }
                TabOp::Prev => {
                    manager.prev_tab().unwrap();
                }
            }

            prop_assert_eq!(manager.tab_count(), expected_count, "after {:?}", op);
            prop_assert!(manager.tab_count() >= 1);
            let idx = manager.active_index();
            prop_assert!(matches!(idx, Some(i) if i < manager.tab_count()), "active index {:?} out of bounds", idx);
        }
    }
}
