//! Runtime value types shared by the generator, the accessors and the host.
//!
//! - `Ordinal` is the integer a label stands for.
//! - `ColumnKey` names the persisted field an enum drives.
//! - `Field` is the typed read/write pair the host hands to the generator.
pub mod column;
pub mod field;
pub mod ordinal;

pub use column::ColumnKey;
pub use field::Field;
pub use ordinal::Ordinal;
