use crate::model::ColumnKey;

///
/// Persist
///
/// Host persistence seam used by generated mutators. The field value has
/// already been written in memory; `persist_field` durably commits exactly
/// that one field. Its result, success or failure, is handed back to the
/// mutator's caller unchanged.
///

pub trait Persist {
    type Output;
    type Error;

    fn persist_field(&mut self, column: &ColumnKey) -> Result<Self::Output, Self::Error>;
}
