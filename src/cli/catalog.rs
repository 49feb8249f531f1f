use super::ui;
use crate::core::IndexCategory;
use crate::store::csv::sanitize_name;
use anyhow::Result;
use comfy_table::Cell;

/// Lists every category with its assets, data files and quote pages.
pub fn run() -> Result<()> {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell("Asset"),
        ui::header_cell("Data file"),
        ui::header_cell("Quote page"),
    ]);

    for category in IndexCategory::all() {
        for entry in category.catalog().entries() {
            table.add_row(vec![
                Cell::new(category),
                Cell::new(entry.name),
                Cell::new(format!("{}.csv", sanitize_name(entry.csv_name))),
                Cell::new(entry.quote_path),
            ]);
        }
    }

    println!("{table}");
    Ok(())
}
