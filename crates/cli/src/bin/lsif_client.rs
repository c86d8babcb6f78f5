use anyhow::Result;

fn main() -> Result<()> {
    lsif_cli::main_entry()
}
