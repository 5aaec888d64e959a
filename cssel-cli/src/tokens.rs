//! Command-line tokens to selector builder calls.

use anyhow::{Context, Result, bail};
use cssel_builder::{Category, ComplexPart, SelectorBuilder, facade};

/// Build a selector from `kind=value` parts and bare combinator tokens.
///
/// Parts accumulate on the current compound selector. A combinator token
/// closes it; with at least one combinator the compounds are joined with
/// [`facade::combine`].
pub fn build_selector<S: AsRef<str>>(tokens: &[S]) -> Result<SelectorBuilder> {
    let mut parts: Vec<ComplexPart> = Vec::new();
    let mut current = SelectorBuilder::new();

    for token in tokens {
        let token = token.as_ref();
        if let Some((kind, value)) = token.split_once('=') {
            let category: Category = kind
                .parse()
                .with_context(|| format!("unknown selector part '{kind}'"))?;
            current = apply_part(current, category, value)
                .with_context(|| format!("while adding '{token}'"))?;
        } else {
            parts.push(std::mem::take(&mut current).into());
            parts.push(token.into());
        }
    }

    if parts.is_empty() {
        return Ok(current);
    }
    parts.push(current.into());
    Ok(facade::combine(parts))
}

fn apply_part(
    builder: SelectorBuilder,
    category: Category,
    value: &str,
) -> Result<SelectorBuilder> {
    let builder = match category {
        Category::Element => builder.element(value)?,
        Category::Id => builder.id(value)?,
        Category::Class => builder.class(value)?,
        Category::Attribute => builder.attribute(value)?,
        Category::PseudoClass => builder.pseudo_class(value)?,
        Category::PseudoElement => builder.pseudo_element(value)?,
        Category::Combined => bail!("'{category}' is not a selector part"),
    };
    Ok(builder)
}
