use crate::domain::ReleaseCycle;

/// Renders one release cycle as a single line. Label order is fixed; the
/// tri-state fields go through `FieldValue::display`, while release date and
/// latest release pass through as-is (empty when the upstream omits them).
pub fn format_cycle(product: &str, cycle: &ReleaseCycle) -> String {
    let link = cycle.link.as_deref().unwrap_or("N/A");
    format!(
        "Details for product {} cycle {} details: Release Date: {}, EOL: {}, Latest: {}, Link: {}, LTS: {}, Support: {}, Discontinued: {}",
        product,
        cycle.cycle,
        cycle.release_date,
        cycle.eol.display(),
        cycle.latest,
        link,
        cycle.lts.display(),
        cycle.support.display(),
        cycle.discontinued.display(),
    )
}

/// One line per cycle, upstream order, empty input renders as an empty
/// string.
pub fn format_cycles(product: &str, cycles: &[ReleaseCycle]) -> String {
    cycles
        .iter()
        .map(|cycle| format_cycle(product, cycle))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_products(products: &[String]) -> String {
    format!("Available products: [{}]", products.join(", "))
}
