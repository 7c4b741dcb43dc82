use anyhow::Result;

fn main() -> Result<()> {
    depcalc_lib::main()
}
