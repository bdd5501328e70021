use itertools::Itertools;
use smallvec::SmallVec;
use std::ops::ControlFlow;

const TYPICAL_NUM_ARGUMENTS: usize = 5;

/// The arguments of a ground atom or the instantiation of an operator.
pub type ObjectTuple = SmallVec<[usize; TYPICAL_NUM_ARGUMENTS]>;

// based on [`smallvec::smallvec`]
#[allow(unused_macros)]
macro_rules! object_tuple {
    (@one $x:expr) => (1usize);
    ($elem:expr; $n:expr) => ({
        $crate::search::ObjectTuple::from_elem($elem, $n)
    });
    ($($x:expr),*$(,)*) => ({
        let count = 0usize $(+ $crate::search::object_tuple!(@one $x))*;
        #[allow(unused_mut)]
        let mut vec = $crate::search::ObjectTuple::new();
        if count <= vec.inline_size() {
            $(vec.push($x);)*
            vec
        } else {
            $crate::search::ObjectTuple::from_vec(vec![$($x,)*])
        }
    });
}
pub(crate) use object_tuple;

/// Calls `f` with every assignment that picks one value from each domain, in
/// lexicographic order of domain positions, until `f` breaks. A single empty
/// assignment is produced when there are no domains.
pub(crate) fn for_each_assignment<F>(domains: &[&[usize]], mut f: F) -> ControlFlow<()>
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    if domains.is_empty() {
        return f(&[]);
    }
    domains
        .iter()
        .map(|domain| domain.iter().copied())
        .multi_cartesian_product()
        .try_for_each(|assignment| f(&assignment))
}

/// Like [`for_each_assignment`], but builds assignments value by value and
/// skips every extension of a prefix that `admissible` rejects. `admissible`
/// sees each non-empty prefix, including the complete assignment.
pub(crate) fn for_each_admissible_assignment<A, F>(
    domains: &[&[usize]],
    mut admissible: A,
    mut f: F,
) -> ControlFlow<()>
where
    A: FnMut(&[usize]) -> bool,
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    fn extend<A, F>(
        domains: &[&[usize]],
        prefix: &mut Vec<usize>,
        admissible: &mut A,
        f: &mut F,
    ) -> ControlFlow<()>
    where
        A: FnMut(&[usize]) -> bool,
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        let Some(domain) = domains.get(prefix.len()) else {
            return f(prefix.as_slice());
        };
        for &value in domain.iter() {
            prefix.push(value);
            let flow = if admissible(prefix.as_slice()) {
                extend(domains, prefix, admissible, f)
            } else {
                ControlFlow::Continue(())
            };
            prefix.pop();
            flow?;
        }
        ControlFlow::Continue(())
    }

    let mut prefix = Vec::with_capacity(domains.len());
    extend(domains, &mut prefix, &mut admissible, &mut f)
}
