use anyhow::Result;
use comfy_table::Table;

use notes_cli::pipeline::run_prepare;
use notes_cli::types::PrepareResult;
use notes_model::Section;

use crate::cli::PrepareArgs;
use crate::summary::apply_table_style;

pub fn run_sections() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Matched label", "Rendered label"]);
    apply_table_style(&mut table);
    for section in Section::ALL {
        let marker = if Section::ADMISSION_INDICATIVE.contains(&section) {
            " *"
        } else {
            ""
        };
        table.add_row(vec![
            format!("{}{marker}", section.key()),
            format!("{}:", section.source_label()),
            format!("{}:", section.display_label()),
        ]);
    }
    println!("{table}");
    println!("* notes lacking all marked sections are dropped in admission-only mode");
    Ok(())
}

pub fn run_prepare_command(args: &PrepareArgs) -> Result<PrepareResult> {
    run_prepare(&args.to_options())
}
