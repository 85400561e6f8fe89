fn main() -> anyhow::Result<()> {
    alu2c::run()
}
