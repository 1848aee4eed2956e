//! Console formatting for catalog results.

use std::io::Write;

use stockroom_catalog::{Catalog, StockUpdate};
use stockroom_core::ItemId;

use crate::error::ShellResult;

const RULE: &str = "---------------------------------------------------------";

pub fn item_added(out: &mut impl Write, id: ItemId) -> ShellResult<()> {
    writeln!(out, "Item added with ID: {id}")?;
    Ok(())
}

pub fn stock_updated(out: &mut impl Write, update: &StockUpdate) -> ShellResult<()> {
    writeln!(
        out,
        "Updated {} (ID {}): {} -> {}",
        update.name, update.id, update.previous, update.quantity
    )?;
    Ok(())
}

pub fn not_found(out: &mut impl Write, id: impl core::fmt::Display) -> ShellResult<()> {
    writeln!(out, "Item with ID {id} not found.")?;
    Ok(())
}

pub fn catalog_table(out: &mut impl Write, catalog: &Catalog) -> ShellResult<()> {
    if catalog.is_empty() {
        writeln!(out, "Catalog is empty.")?;
        return Ok(());
    }

    writeln!(out, "ID\tName\tCategory\tUnit cost\tQuantity")?;
    for item in catalog.list_items() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            item.id_typed(),
            item.name(),
            item.category(),
            item.unit_cost(),
            item.quantity()
        )?;
    }
    writeln!(out, "{RULE}")?;
    Ok(())
}

pub fn catalog_json(out: &mut impl Write, catalog: &Catalog) -> ShellResult<()> {
    serde_json::to_writer(&mut *out, catalog.items())?;
    writeln!(out)?;
    Ok(())
}

pub fn total_value(out: &mut impl Write, currency: &str, total: i128) -> ShellResult<()> {
    writeln!(out, "Total catalog value: {currency} {total}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_catalog::NewItem;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> ShellResult<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_catalog_says_so() {
        let catalog = Catalog::new();
        assert_eq!(render(|o| catalog_table(o, &catalog)), "Catalog is empty.\n");
        assert_eq!(render(|o| catalog_json(o, &catalog)), "[]\n");
    }

    #[test]
    fn table_rows_follow_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.insert_item(NewItem::new("laptop", "electronics", 45_000, 50));
        catalog.insert_item(NewItem::new("tablet", "electronics", 30_000, 75));

        let text = render(|o| catalog_table(o, &catalog));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "1\tlaptop\telectronics\t45000\t50");
        assert_eq!(lines[2], "2\ttablet\telectronics\t30000\t75");
        assert_eq!(lines[3], RULE);
    }

    #[test]
    fn total_carries_currency_label() {
        assert_eq!(
            render(|o| total_value(o, "₹", 8_250_000)),
            "Total catalog value: ₹ 8250000\n"
        );
    }
}
