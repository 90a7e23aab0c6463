//! Property tests checking [balisage::Elements] against a plain `Vec` model.

use balisage::{bumpalo::Bump, Elements};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(Vec<u8>),
    Set(Vec<u8>),
    Insert(isize, u8),
    Update(isize, u8),
    Remove(isize),
    Pop,
    PopAt(isize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => prop::collection::vec(any::<u8>(), 0..4).prop_map(Op::Add),
        1 => prop::collection::vec(any::<u8>(), 0..4).prop_map(Op::Set),
        4 => (-8isize..8, any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
        3 => (-8isize..8, any::<u8>()).prop_map(|(i, v)| Op::Update(i, v)),
        3 => (-8isize..8).prop_map(Op::Remove),
        2 => Just(Op::Pop),
        2 => (-8isize..8).prop_map(Op::PopAt),
        1 => Just(Op::Clear),
    ]
}

/// Resolve `index` against `len`; valid positions are `0..upper`.
fn model_index(len: usize, index: isize, upper: usize) -> Option<usize> {
    let resolved = if index < 0 { index + len as isize } else { index };
    (0..upper as isize)
        .contains(&resolved)
        .then_some(resolved as usize)
}

/// Apply `op` to the model, returning whether it succeeded.
fn apply_model(model: &mut Vec<String>, op: &Op) -> bool {
    let len = model.len();
    match op {
        Op::Add(values) => model.extend(values.iter().map(u8::to_string)),
        Op::Set(values) => *model = values.iter().map(u8::to_string).collect(),
        Op::Insert(i, v) => match model_index(len, *i, len + 1) {
            Some(i) => model.insert(i, v.to_string()),
            None => return false,
        },
        Op::Update(i, v) => match model_index(len, *i, len) {
            Some(i) => model[i] = v.to_string(),
            None => return false,
        },
        Op::Remove(i) | Op::PopAt(i) => match model_index(len, *i, len) {
            Some(i) => {
                model.remove(i);
            }
            None => return false,
        },
        Op::Pop => return model.pop().is_some(),
        Op::Clear => model.clear(),
    }
    true
}

fn apply(elements: &mut Elements, op: &Op) -> bool {
    match op {
        Op::Add(values) => elements.add(values.iter().map(u8::to_string)),
        Op::Set(values) => elements.set(values.iter().map(u8::to_string)),
        Op::Insert(i, v) => return elements.insert(*i, v.to_string()).is_ok(),
        Op::Update(i, v) => return elements.update(*i, v.to_string()).is_ok(),
        Op::Remove(i) => return elements.remove(*i).is_ok(),
        Op::Pop => return elements.pop().is_ok(),
        Op::PopAt(i) => return elements.pop_at(*i).is_ok(),
        Op::Clear => elements.clear(),
    }
    true
}

fn texts(elements: &Elements) -> Vec<String> {
    elements
        .iter()
        .filter_map(|e| e.as_text())
        .map(str::to_string)
        .collect()
}

proptest! {
    #[test]
    fn prop_matches_vec_model(ops in prop::collection::vec(op(), 0..40)) {
        let bump = Bump::new();
        let mut elements = Elements::new(&bump);
        let mut model = Vec::new();

        for op in &ops {
            let before = texts(&elements);
            let ok = apply(&mut elements, op);
            prop_assert_eq!(ok, apply_model(&mut model, op), "{:?}", op);
            if !ok {
                prop_assert_eq!(texts(&elements), before);
            }
            prop_assert_eq!(texts(&elements), model.clone());
            prop_assert_eq!(elements.len(), model.len());
        }
    }

    #[test]
    fn prop_out_of_range_never_mutates(
        values in prop::collection::vec(any::<u8>(), 0..6),
        offset in 0usize..4,
        negative in any::<bool>()
    ) {
        let bump = Bump::new();
        let mut elements = Elements::new(&bump);
        elements.add(values.iter().map(u8::to_string));
        let before = texts(&elements);

        let len = values.len() as isize;
        let index = if negative { -len - 1 - offset as isize } else { len + offset as isize };

        prop_assert!(elements.remove(index).is_err());
        prop_assert!(elements.update(index, "x").is_err());
        prop_assert!(elements.pop_at(index).is_err());
        prop_assert_eq!(texts(&elements), before);
    }
}
