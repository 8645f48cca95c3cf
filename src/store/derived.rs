use std::rc::Rc;

use super::writable::{Inner, Readable};

/// Build a cell whose value is `f(a, b)`, recomputed eagerly from the latest
/// values of `a` and `b` every time either of them changes.
///
/// The returned `Readable` owns the upstream subscriptions: once every clone
/// of it is dropped, `a` and `b` stop feeding it.
pub fn derived2<A, B, U, F>(a: &Readable<A>, b: &Readable<B>, f: F) -> Readable<U>
where
    A: Clone + 'static,
    B: Clone + 'static,
    U: Clone + 'static,
    F: Fn(&A, &B) -> U + 'static,
{
    let f = Rc::new(f);
    let out = Inner::new(f(&a.get(), &b.get()));

    let from_a = {
        let out = Rc::downgrade(&out);
        let b = b.clone();
        let f = f.clone();
        a.subscribe(move |a_val| {
            if let Some(out) = out.upgrade() {
                out.replace(f(a_val, &b.get()));
            }
        })
    };

    let from_b = {
        let out = Rc::downgrade(&out);
        let a = a.clone();
        b.subscribe(move |b_val| {
            if let Some(out) = out.upgrade() {
                out.replace(f(&a.get(), b_val));
            }
        })
    };

    Readable::from_parts(out, vec![from_a, from_b])
}
