use anyhow::{Context, Result};
use clap::Parser;
use snowverload::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let diagram = snowverload::read_wiring_diagram(&args.input_path).with_context(|| {
        format!(
            "Failed to read wiring diagram in given file({}).",
            args.input_path.display()
        )
    })?;

    let split = diagram.split().with_context(|| {
        format!(
            "Failed to split {} component(s) connected by {} wire(s) into two groups.",
            diagram.components_n(),
            diagram.wires_n()
        )
    })?;
    let expect_cut_wires_n = 3;
    if split.cut_wires_n() != expect_cut_wires_n {
        eprintln!(
            "Expect to cut {} wires to split given components, but the minimum cut has {}.",
            expect_cut_wires_n,
            split.cut_wires_n()
        );
    }
    println!(
        "The product of the two group sizes after cutting {} wire(s) is {}.",
        split.cut_wires_n(),
        split.group_sizes_product()
    );

    Ok(())
}
