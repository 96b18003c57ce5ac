use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use itertools::Itertools;

use super::*;

qc!(iter_in_key_order, _iter_in_key_order);
fn _iter_in_key_order(list: Vec<(TestKey, i32)>) -> bool {
    let trie = build(&list);
    trie.iter()
        .map(|e| (e.key(), *e.value()))
        .eq(model(&list).into_iter())
}

qc!(keys_sorted, _keys_sorted);
fn _keys_sorted(list: Vec<(u8, u8)>) -> bool {
    let trie = build(&list);
    trie.keys().eq(list.iter().map(|(k, _)| *k).sorted().dedup())
}

qc!(into_iter_in_key_order, _into_iter_in_key_order);
fn _into_iter_in_key_order(list: Vec<(TestKey, i32)>) -> bool {
    let trie = build(&list);
    trie.into_iter()
        .map(Entry::into_parts)
        .eq(model(&list).into_iter())
}

qc!(show_in_key_order, _show_in_key_order);
fn _show_in_key_order(list: Vec<(u8, u8)>) -> bool {
    let mut trie =
        BitTrie::<u8, u8>::new().with_renderer(|e, w| writeln!(w, "{} {}", e.key(), e.value()));
    trie.extend(list.iter().copied());
    let mut out = Vec::new();
    if trie.show(&mut out).is_err() {
        return false;
    }
    let want: String = model(&list)
        .into_iter()
        .map(|(k, t)| format!("{k} {t}\n"))
        .collect();
    out == want.into_bytes()
}

qc!(release_once_per_entry, _release_once_per_entry);
fn _release_once_per_entry(list: Vec<(TestKey, i32)>) -> bool {
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();
    let mut trie = BitTrie::new().with_release(move |_: Entry<TestKey, i32>| {
        c.fetch_add(1, Ordering::SeqCst);
    });
    trie.extend(list.iter().copied());
    drop(trie);
    count.load(Ordering::SeqCst) == model(&list).len()
}
