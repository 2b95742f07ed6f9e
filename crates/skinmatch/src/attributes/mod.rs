//! # Attribute Spaces
//!
//! Every catalog in skinmatch is tagged against a closed set of named boolean
//! attributes: skin concerns, ingredient functions, permissions, and so on.
//! Instead of each domain inventing its own object-literal enum, a domain
//! declares its names once and gets back an [`AttributeSpace`]:
//!
//! - **Bits**: the i-th name owns bit `1 << i` in a [`Mask`](crate::bits::Mask)
//! - **Closed**: unknown names are caught at lookup time rather than
//!   silently producing a zero bit
//! - **Any string**: [`AttributeSpace::define`] only requires distinct names;
//!   [`AttributeSpace::define_validated`] also applies
//!   [`validate_attribute_name`], which catalog files go through
//! - **Ordered**: decoding a mask lists names in definition order
//!
//! ## Usage
//!
//! ```
//! use skinmatch::attributes::AttributeSpace;
//!
//! let space = AttributeSpace::define(["ACNE", "DULL", "DRY", "OILY"]).unwrap();
//! assert_eq!(space.bit("DRY"), Some(0b0100));
//! ```

mod space;
mod validation;

pub use space::AttributeSpace;
pub use validation::{NameValidationError, validate_attribute_name};
