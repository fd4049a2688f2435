//! Canonical Solidity type rendering.
//!
//! Selector hashing needs each parameter as a type-only fragment with tuples
//! expanded structurally: a `tuple` with components `uint256, address`
//! becomes `(uint256,address)`, a `tuple[]` becomes `(uint256,address)[]`.
//! Every other type string, including plain arrays, passes through as-is.

use tvmcodec_core::AbiParameter;

/// Render one parameter's canonical type.
///
/// A tuple type without `components` is malformed; its raw type string is
/// returned unchanged.
pub fn canonical_type(param: &AbiParameter) -> String {
    match (param.tuple_suffix(), &param.components) {
        (Some(suffix), Some(components)) => {
            format!("({}){suffix}", canonical_types(components).join(","))
        }
        _ => param.ty.clone(),
    }
}

/// Render a parameter list's canonical types, in order.
pub fn canonical_types(params: &[AbiParameter]) -> Vec<String> {
    params.iter().map(canonical_type).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(ty: &str) -> AbiParameter {
        AbiParameter::new("", ty)
    }

    #[test]
    fn flat_types_unchanged() {
        for ty in ["uint256", "address", "bool", "bytes32", "string", "uint256[]", "address[3]"] {
            assert_eq!(canonical_type(&p(ty)), ty);
        }
    }

    #[test]
    fn tuple_expands() {
        let t = AbiParameter::tuple("order", "tuple", vec![p("uint256"), p("address"), p("bytes")]);
        let rendered = canonical_type(&t);
        assert_eq!(rendered, "(uint256,address,bytes)");
        assert_eq!(rendered.matches(',').count() + 1, 3);
    }

    #[test]
    fn tuple_array_appends_suffix() {
        let t = AbiParameter::tuple("orders", "tuple[]", vec![p("uint256"), p("address")]);
        assert_eq!(canonical_type(&t), "(uint256,address)[]");
        let fixed = AbiParameter::tuple("pair", "tuple[2]", vec![p("bool")]);
        assert_eq!(canonical_type(&fixed), "(bool)[2]");
    }

    #[test]
    fn nested_tuples_recurse() {
        let inner = AbiParameter::tuple("leg", "tuple[]", vec![p("address"), p("uint24")]);
        let outer = AbiParameter::tuple("route", "tuple", vec![p("uint256"), inner]);
        assert_eq!(canonical_type(&outer), "(uint256,(address,uint24)[])");
    }

    #[test]
    fn tuple_without_components_is_left_alone() {
        assert_eq!(canonical_type(&p("tuple")), "tuple");
    }

    #[test]
    fn missing_type_renders_empty() {
        assert_eq!(canonical_type(&AbiParameter::default()), "");
    }
}
