// Sample run: fill a schedule through the entry forms and write both exports
use std::path::Path;

use anyhow::Result;
use rlm_schedule::models::category::Category;
use rlm_schedule::models::region::{Region, RegionFilter};
use rlm_schedule::services::settings::SettingsService;
use rlm_schedule::Session;

fn main() -> Result<()> {
    env_logger::init();

    let config = SettingsService::load_default();
    let mut session = Session::new(config);

    println!("=== RLM schedule export sample ===\n");

    // Catalog edits made from the side panel
    session.catalog_editor().add_locality(Region::Jaciara, "Jaciara - Vila Plana");
    session.catalog_editor().add_meeting_type("Reunião de Jovens");
    session.set_filter(RegionFilter::All);

    let rows: [(Category, &[&str]); 4] = [
        (Category::Evangelization, &["03/05 19:30", "Juscimeira", "Irmão Israel"]),
        (
            Category::Baptisms,
            &["10/05 19:00", "Jaciara - Central", "Santa Elvira", "Irmão Marcos"],
        ),
        (
            Category::Rehearsals,
            &["17/05 14:00", "Jaciara - Vila Plana", "Ensaio para Cordas", "Paulo Casarim"],
        ),
        (
            Category::Youth,
            &["18/05 09:00", "Irenópolis", "Reunião de Jovens", "Irmão Ercides"],
        ),
    ];

    for (category, values) in rows {
        let mut form = session.entry_form(category);
        for (column, value) in category.columns().iter().zip(values.iter()) {
            form.set(column.label, value)?;
        }
        session.submit(&form)?;
        println!("{}", session.table(category));
    }

    let out_dir = Path::new("escala_export");
    let pdf = session.export_document()?;
    let xlsx = session.export_spreadsheet()?;
    println!("Wrote {}", pdf.write_to_dir(out_dir)?.display());
    println!("Wrote {}", xlsx.write_to_dir(out_dir)?.display());

    Ok(())
}
