use proptest::prelude::*;
use proptest::sample::Index;

use tree_swap::types::Node;
use tree_swap::{check_links, swap};

#[derive(Clone, Debug, PartialEq)]
struct TestNode {
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
    k: i32,
}

impl Node for TestNode {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// Unbalanced BST built by plain insertion; equal keys go right.
fn build_tree(keys: &[i32]) -> Vec<TestNode> {
    let mut arena: Vec<TestNode> = Vec::with_capacity(keys.len());
    for &k in keys {
        let node = arena.len() as u32;
        arena.push(TestNode {
            p: None,
            l: None,
            r: None,
            k,
        });
        if node == 0 {
            continue;
        }
        let mut curr = 0u32;
        loop {
            let go_left = k < arena[curr as usize].k;
            let next = if go_left {
                arena[curr as usize].l
            } else {
                arena[curr as usize].r
            };
            match next {
                Some(n) => curr = n,
                None => {
                    if go_left {
                        arena[curr as usize].l = Some(node);
                    } else {
                        arena[curr as usize].r = Some(node);
                    }
                    arena[node as usize].p = Some(curr);
                    break;
                }
            }
        }
    }
    arena
}

fn inorder(arena: &[TestNode], root: u32) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut curr = Some(root);
    while curr.is_some() || !stack.is_empty() {
        while let Some(n) = curr {
            stack.push(n);
            curr = arena[n as usize].l;
        }
        if let Some(n) = stack.pop() {
            out.push(n);
            curr = arena[n as usize].r;
        }
    }
    out
}

proptest! {
    #[test]
    fn swap_transposes_inorder_position(
        keys in prop::collection::vec(-1000i32..1000, 1..64),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let original = build_tree(&keys);
        let x = a.index(keys.len()) as u32;
        let y = b.index(keys.len()) as u32;

        let expected: Vec<u32> = inorder(&original, 0)
            .into_iter()
            .map(|n| if n == x { y } else if n == y { x } else { n })
            .collect();

        let mut arena = original.clone();
        let root = swap(&mut arena, 0, x, y);
        prop_assert_eq!(check_links(&arena, Some(root)), Ok(keys.len()));
        prop_assert_eq!(inorder(&arena, root), expected);

        let root = swap(&mut arena, root, x, y);
        prop_assert_eq!(root, 0);
        prop_assert_eq!(arena, original);
    }

    #[test]
    fn swap_moves_links_not_payload(
        keys in prop::collection::vec(any::<i32>(), 2..32),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let mut arena = build_tree(&keys);
        let x = a.index(keys.len()) as u32;
        let y = b.index(keys.len()) as u32;
        swap(&mut arena, 0, x, y);
        let payload: Vec<i32> = arena.iter().map(|n| n.k).collect();
        prop_assert_eq!(payload, keys);
    }
}
