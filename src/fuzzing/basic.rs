use std::collections::BTreeMap;

use super::*;

qc!(invariants, _invariants);
fn _invariants(list: Vec<(TestKey, i32)>) -> bool {
    let trie = build(&list);
    invariants_hold(&trie)
}

qc!(invariants_small, _invariants_small);
fn _invariants_small(list: Vec<(u8, u8)>) -> bool {
    let trie = build(&list);
    invariants_hold(&trie)
}

qc!(first_value_wins, _first_value_wins);
fn _first_value_wins(list: Vec<(TestKey, i32)>) -> bool {
    let trie = build(&list);
    model(&list).into_iter().all(|(k, t)| {
        trie.get(k) == Some(&t) && trie.search(k).map(|e| e.key()).ok() == Some(k)
    })
}

qc!(size_counts_inserts, _size_counts_inserts);
fn _size_counts_inserts(list: Vec<(TestKey, i32)>) -> bool {
    let trie = build(&list);
    trie.size() == list.len() && trie.iter().count() == model(&list).len()
}

qc!(node_count_is_inner_nodes, _node_count_is_inner_nodes);
fn _node_count_is_inner_nodes(list: Vec<(TestKey, i32)>) -> bool {
    let distinct: Vec<_> = model(&list).into_iter().collect();
    let trie = build(&distinct);
    let (leaves, inner) = count_nodes(&trie);
    trie.node_count() == inner && trie.size() == leaves
}

qc!(height_monotonic, _height_monotonic);
fn _height_monotonic(list: Vec<(TestKey, i32)>) -> bool {
    let mut trie = BitTrie::new();
    let mut last = 0;
    for (k, t) in list {
        trie.insert(k, t);
        if trie.height() < last || trie.height() > BITS_PER_WORD as usize {
            return false;
        }
        last = trie.height();
    }
    true
}

qc!(closest_match, _closest_match);
fn _closest_match((list, queries): (Vec<(TestKey, i32)>, Vec<TestKey>)) -> bool {
    let trie = build(&list);
    let map: BTreeMap<u32, i32> = model(&list).into_iter().map(|(k, t)| (k.0, t)).collect();
    queries.into_iter().all(|q| match trie.search(q) {
        Ok(entry) => model_closest(&map, q.0) == Some(entry.key().0),
        Err(Error::EmptyTrie) => map.is_empty(),
        Err(_) => false,
    })
}

qc!(closest_match_small, _closest_match_small);
fn _closest_match_small((list, queries): (Vec<(u8, u8)>, Vec<u8>)) -> bool {
    let trie = build(&list);
    let map = model(&list);
    queries.into_iter().all(|q| match trie.search(q) {
        Ok(entry) => {
            model_closest(&map, q) == Some(entry.key())
                && map.get(&entry.key()) == Some(entry.value())
        }
        Err(Error::EmptyTrie) => map.is_empty(),
        Err(_) => false,
    })
}

qc!(equality_of_clone, _equality_of_clone);
fn _equality_of_clone(list: Vec<(TestKey, i32)>) -> bool {
    let trie = build(&list);
    let clone = trie.clone();
    format!("{trie:?}") == format!("{clone:?}") && trie.size() == clone.size()
}
