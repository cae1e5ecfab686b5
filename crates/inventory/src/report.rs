//! Rendering of the items report.

use crate::store::StockMap;

/// Displayable listing of the whole stock map.
///
/// Borrows the map from the inventory; rendering mutates nothing.
#[derive(Debug)]
pub struct StockReport<'a> {
    stock: &'a StockMap,
}

impl<'a> StockReport<'a> {
    pub(crate) fn new(stock: &'a StockMap) -> Self {
        Self { stock }
    }
}

impl core::fmt::Display for StockReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "--- Items Report ---")?;
        if self.stock.is_empty() {
            writeln!(f, "Inventory is empty.")?;
        } else {
            for (item, qty) in self.stock {
                writeln!(f, "{item} -> {qty}")?;
            }
        }
        write!(f, "--------------------")
    }
}

#[cfg(test)]
mod tests {
    use crate::store::Inventory;

    #[test]
    fn empty_inventory_reports_as_empty() {
        let inventory = Inventory::new();
        let rendered = inventory.report().to_string();

        assert!(rendered.contains("--- Items Report ---"));
        assert!(rendered.contains("Inventory is empty."));
    }

    #[test]
    fn lists_items_in_name_order() {
        let mut inventory = Inventory::new();
        inventory.add("pear", 3).unwrap();
        inventory.add("apple", 7).unwrap();

        let rendered = inventory.report().to_string();
        let apple = rendered.find("apple -> 7").unwrap();
        let pear = rendered.find("pear -> 3").unwrap();
        assert!(apple < pear);
    }
}
