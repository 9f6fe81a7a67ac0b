pub mod fragment;
pub mod raw;

pub use fragment::{AddressFragment, Family, Fragment, FragmentV4, FragmentV6};
pub use raw::RawValue;
