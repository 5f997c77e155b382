fn main() -> anyhow::Result<()> {
    signup_wizard::run()
}
