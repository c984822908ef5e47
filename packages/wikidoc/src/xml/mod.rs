//! XML utilities for reading storage-format markup with `roxmltree`.

mod markup;
mod utils;

pub use markup::{check_nesting, strip_prolog, tokenize, wrap_markup, ROOT_TAG};
pub use utils::{
    ac_attribute, collect_text, element_children, find_ac_child, find_ri_child, get_tag_name,
    has_element_children, is_ac_element, normalize_whitespace, qualified_name, ri_attribute,
    source_attributes,
};
