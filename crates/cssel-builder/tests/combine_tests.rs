//! Integration tests for complex selectors built with combinators.

use cssel_builder::{
    Category, Combinator, ComplexPart, SelectorBuilder, SelectorError, complex, element,
};

#[test]
fn test_nested_combine_keeps_exact_spacing() -> Result<(), SelectorError> {
    let a = element("div")?
        .id("main")?
        .class("container")?
        .class("draggable")?;
    let b = element("table")?.id("data")?;
    let c = element("tr")?.pseudo_class("nth-of-type(even)")?;
    let d = element("td")?.pseudo_class("nth-of-type(even)")?;

    let selector = complex!(a, "+", complex!(b, "~", complex!(c, " ", d)));
    assert_eq!(
        selector.render(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
    Ok(())
}

#[test]
fn test_single_operand_is_identity() -> Result<(), SelectorError> {
    let x = element("ul")?.class("nav")?.pseudo_class("hover")?;
    let expected = x.render();
    let combined = SelectorBuilder::new().combine([x]);
    assert_eq!(combined.render(), expected);
    Ok(())
}

#[test]
fn test_empty_sequence_renders_empty_string() {
    let combined = SelectorBuilder::new().combine(Vec::<ComplexPart>::new());
    assert_eq!(combined.render(), "");
    assert_eq!(combined.combined(), Some(""));
    assert!(!combined.is_empty());
}

#[test]
fn test_typed_combinators() -> Result<(), SelectorError> {
    let parts = vec![
        ComplexPart::from(element("ul")?),
        ComplexPart::from(Combinator::Child),
        ComplexPart::from(element("li")?),
        ComplexPart::from(Combinator::Column),
        ComplexPart::from(element("td")?),
    ];
    let selector = SelectorBuilder::new().combine(parts);
    assert_eq!(selector.render(), "ul > li || td");
    Ok(())
}

#[test]
fn test_from_token_maps_standard_combinators() {
    assert_eq!(Combinator::from_token(" "), Combinator::Descendant);
    assert_eq!(Combinator::from_token(">"), Combinator::Child);
    assert_eq!(Combinator::from_token("+"), Combinator::NextSibling);
    assert_eq!(Combinator::from_token("~"), Combinator::SubsequentSibling);
    assert_eq!(Combinator::from_token("||"), Combinator::Column);
    assert_eq!(
        Combinator::from_token("/deep/"),
        Combinator::Other("/deep/".to_string())
    );
    assert!(!Combinator::from_token("/deep/").is_standard());
}

#[test]
fn test_custom_combinator_inserted_verbatim() -> Result<(), SelectorError> {
    let selector = complex!(element("a")?, "/deep/", element("b")?);
    assert_eq!(selector.render(), "a /deep/ b");
    assert!(cssel_common::warning::has_warned(
        "Selector",
        "non-standard combinator '/deep/' used verbatim"
    ));
    Ok(())
}

#[test]
fn test_combined_supersedes_parts() -> Result<(), SelectorError> {
    let selector = element("section")?.combine([element("p")?]);
    assert_eq!(selector.element_name(), Some("section"));
    assert_eq!(selector.render(), "p");
    Ok(())
}

#[test]
fn test_setter_after_combine_is_order_error() -> Result<(), SelectorError> {
    let combined = complex!(element("a")?, ">", element("b")?);
    let err = combined.clone().class("x").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            category: Category::Class,
            after: Category::Combined,
        }
    );

    let err = combined.pseudo_element("after").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            category: Category::PseudoElement,
            after: Category::Combined,
        }
    );
    Ok(())
}

#[test]
fn test_combined_render_is_idempotent() -> Result<(), SelectorError> {
    let selector = complex!(element("h1")?, "+", element("p")?);
    assert_eq!(selector.render(), selector.render());
    assert_eq!(selector.render(), "h1 + p");
    Ok(())
}

#[test]
fn test_combined_serializes_as_string() -> Result<(), SelectorError> {
    let selector = complex!(element("h1")?, "~", element("p")?);
    let json = serde_json::to_value(&selector).unwrap();
    assert_eq!(json, serde_json::json!({ "combined": "h1 ~ p" }));
    Ok(())
}
