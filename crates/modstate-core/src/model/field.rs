use crate::model::Ordinal;
use std::fmt;

///
/// Field
///
/// Typed read/write pair for the record field an enum attribute drives.
/// `get` returns `None` when the stored value is null or not representable
/// as an ordinal; such a value never matches a predicate.
///

pub struct Field<R> {
    get: fn(&R) -> Option<Ordinal>,
    set: fn(&mut R, Ordinal),
}

impl<R> Field<R> {
    #[must_use]
    pub const fn new(get: fn(&R) -> Option<Ordinal>, set: fn(&mut R, Ordinal)) -> Self {
        Self { get, set }
    }

    #[must_use]
    pub fn read(&self, record: &R) -> Option<Ordinal> {
        (self.get)(record)
    }

    pub fn write(&self, record: &mut R, ordinal: Ordinal) {
        (self.set)(record, ordinal);
    }

    pub(crate) const fn getter(&self) -> fn(&R) -> Option<Ordinal> {
        self.get
    }

    pub(crate) const fn setter(&self) -> fn(&mut R, Ordinal) {
        self.set
    }
}

// manual impls: fn pointers are Copy whatever `R` is
impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").finish_non_exhaustive()
    }
}
